//! Record types served by catalog sources
//!
//! - [`Product`] - a catalog item with a display icon
//! - [`Customer`] - a named customer
//! - [`JsonRecord`] - any JSON object with a numeric `id`, other fields kept
//!   as-is; used when the record shape is not known in advance

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::{Record, RecordId, deserialize_id};

/// A product as served by a products source.
///
/// ```json
/// {"id": 10, "name": "Pizza slice", "icon": "fas fa-pizza-slice"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: RecordId,
    pub name: String,
    /// Icon class names, e.g. `fas fa-pizza-slice`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Product {
    /// A product is complete when it has a non-zero id, a name and an icon.
    ///
    /// Usable directly as an accessor validator:
    ///
    /// ```rust,no_run
    /// use catalog_cli::accessor::CollectionAccessor;
    /// use catalog_cli::models::Product;
    ///
    /// let products = CollectionAccessor::<Product>::new("https://example.com/products.json")
    ///     .with_validator(Product::is_valid);
    /// ```
    pub fn is_valid(&self) -> bool {
        self.id != 0
            && !self.name.is_empty()
            && self.icon.as_deref().is_some_and(|icon| !icon.is_empty())
    }
}

impl Record for Product {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// A customer as served by a customers source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: RecordId,
    pub name: String,
}

impl Record for Customer {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Schema-less record: a numeric `id` plus whatever else the source sent.
///
/// Field order of the remaining fields follows `serde_json`'s map ordering
/// (sorted by key).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl JsonRecord {
    /// A field other than `id`, as a string if it is one.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

impl Record for JsonRecord {
    fn id(&self) -> RecordId {
        self.id
    }
}
