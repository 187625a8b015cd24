//! The record capability shared by everything the accessor can hold.
//!
//! A record is any value carrying a unique numeric identifier. The accessor
//! never looks at the rest of a record's fields; they are opaque payload as
//! far as fetching, caching and lookup are concerned.

use serde::de::{Deserialize, Deserializer, Error as _};
use serde_json::Number;

/// Numeric identifier carried by every [`Record`].
///
/// Remote sources serve identifiers as JSON numbers. Integers and
/// integer-valued floats (`10.0`) are accepted; see [`deserialize_id`].
pub type RecordId = i64;

/// Deserialize a [`RecordId`] from any integral JSON number.
///
/// Use with `#[serde(deserialize_with = "...")]` on a record's `id` field.
/// Fractional values and integers outside the `i64` range are rejected.
///
/// ```rust
/// use catalog_cli::core::{RecordId, deserialize_id};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Row {
///     #[serde(deserialize_with = "deserialize_id")]
///     id: RecordId,
/// }
///
/// let row: Row = serde_json::from_str(r#"{"id": 10.0}"#).unwrap();
/// assert_eq!(row.id, 10);
/// assert!(serde_json::from_str::<Row>(r#"{"id": 10.5}"#).is_err());
/// ```
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<RecordId, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    id_from_number(&number)
        .ok_or_else(|| D::Error::custom(format!("invalid id {number}, expected an integer")))
}

fn id_from_number(number: &Number) -> Option<RecordId> {
    if let Some(id) = number.as_i64() {
        return Some(id);
    }
    if number.is_u64() {
        return None;
    }

    // -2^63 and 2^63 are exact in f64
    let value = number.as_f64()?;
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.fract() == 0.0 && in_range).then_some(value as RecordId)
}

/// Capability trait for values that can be stored in a
/// [`CollectionAccessor`](crate::accessor::CollectionAccessor).
///
/// Implementations must return the same identifier on every call and must not
/// have side effects; lookups call [`Record::id`] once per cached element.
///
/// # Examples
///
/// ```rust
/// use catalog_cli::core::{Record, RecordId};
/// use serde::Deserialize;
///
/// #[derive(Debug, Clone, Deserialize)]
/// struct Invoice {
///     id: RecordId,
///     total_cents: u64,
/// }
///
/// impl Record for Invoice {
///     fn id(&self) -> RecordId {
///         self.id
///     }
/// }
///
/// let invoice = Invoice { id: 7, total_cents: 1250 };
/// assert_eq!(invoice.id(), 7);
/// assert!(invoice.has_id(7));
/// ```
pub trait Record {
    /// The record's unique identifier.
    fn id(&self) -> RecordId;

    /// Whether this record is identified by `id`.
    ///
    /// Pure comparison; neither side is modified.
    fn has_id(&self, id: RecordId) -> bool {
        self.id() == id
    }
}

/// Caller-supplied check applied to every record of a fetch.
///
/// Validation is a plain predicate rather than a method on the record type, so
/// the same record type can be validated differently by different accessors.
pub type Validator<T> = fn(&T) -> bool;
