//! Generic remote-collection accessor.
//!
//! A [`CollectionAccessor`] is bound to one source URL. It fetches the JSON
//! array served there, keeps the decoded records in memory, and answers
//! lookups by id from that cache.
//!
//! ```text
//! new(url) ──► Empty ──fetch_all() ok──► Populated ──fetch_all() ok──► Populated
//!                │                          │
//!                └─ fetch_all() err ─► Empty └─ fetch_all() err ─► Populated (unchanged)
//! ```
//!
//! # Caching
//!
//! The cache is an immutable `Arc<Vec<T>>` that a successful fetch swaps in
//! as a whole. Readers clone the `Arc` and never observe a partially written
//! collection. A failed fetch leaves the previous collection (or the empty
//! state) in place.
//!
//! Fetches on the same accessor are serialized: a second `fetch_all` waits for
//! the first to finish, so the cache always holds the result of the fetch that
//! completed last in call order.
//!
//! # Examples
//!
//! ```rust,no_run
//! use catalog_cli::accessor::CollectionAccessor;
//! use catalog_cli::models::Product;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let products = CollectionAccessor::<Product>::new("https://example.com/products.json");
//!
//! let all = products.fetch_all().await?;
//! println!("{} products", all.len());
//!
//! if let Some(pizza) = products.find_by_id(10) {
//!     println!("#{} {}", pizza.id, pizza.name);
//! }
//! # Ok(())
//! # }
//! ```

mod source;

pub use source::{FetchFuture, HttpSource, RecordSource};

use std::sync::{Arc, PoisonError, RwLock};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::config::HttpSettings;
use crate::core::{AccessorError, Record, RecordId, Validator};

/// Observable state of a [`CollectionAccessor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorState {
    /// No fetch has succeeded yet.
    Empty,
    /// Holds the result of the most recent successful fetch.
    Populated {
        /// Number of cached records (may be zero).
        len: usize,
    },
}

/// Fetches, caches and indexes a homogeneous collection of records.
///
/// `T` is the record type and `S` the [`RecordSource`] the body is fetched
/// from, [`HttpSource`] unless a custom one is supplied through
/// [`CollectionAccessor::with_source`].
pub struct CollectionAccessor<T, S = HttpSource> {
    source_url: String,
    source: S,
    validator: Option<Validator<T>>,
    cached_items: RwLock<Option<Arc<Vec<T>>>>,
    fetch_lock: Mutex<()>,
}

impl<T> CollectionAccessor<T, HttpSource> {
    /// Accessor for `source_url` using an HTTP client with default settings.
    pub fn new(source_url: impl Into<String>) -> Self {
        Self::with_source(source_url, HttpSource::new())
    }

    /// Accessor for `source_url` using an HTTP client built from `settings`.
    pub fn from_settings(
        source_url: impl Into<String>,
        settings: &HttpSettings,
    ) -> anyhow::Result<Self> {
        Ok(Self::with_source(source_url, HttpSource::from_settings(settings)?))
    }
}

impl<T, S> CollectionAccessor<T, S> {
    /// Accessor for `source_url` fetching through `source`.
    pub fn with_source(source_url: impl Into<String>, source: S) -> Self {
        Self {
            source_url: source_url.into(),
            source,
            validator: None,
            cached_items: RwLock::new(None),
            fetch_lock: Mutex::new(()),
        }
    }

    /// Reject any fetch containing a record for which `validator` is false.
    #[must_use]
    pub fn with_validator(mut self, validator: Validator<T>) -> Self {
        self.validator = Some(validator);
        self
    }

    /// The URL this accessor fetches from.
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// The cached collection, or `None` if no fetch has succeeded yet.
    ///
    /// `Some` with an empty vector means the last fetch succeeded and the
    /// source served `[]`.
    pub fn items(&self) -> Option<Arc<Vec<T>>> {
        self.cached_items.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Whether the accessor holds a fetched collection.
    pub fn state(&self) -> AccessorState {
        match self.items() {
            None => AccessorState::Empty,
            Some(items) => AccessorState::Populated {
                len: items.len(),
            },
        }
    }

    fn replace_cache(&self, items: Arc<Vec<T>>) {
        *self.cached_items.write().unwrap_or_else(PoisonError::into_inner) = Some(items);
    }
}

impl<T: Record + Clone, S> CollectionAccessor<T, S> {
    /// The first cached record whose id equals `id`.
    ///
    /// Returns `None` when nothing has been fetched yet or no record matches.
    /// Never touches the network and never modifies the cache.
    pub fn find_by_id(&self, id: RecordId) -> Option<T> {
        self.items()?.iter().find(|record| record.has_id(id)).cloned()
    }
}

impl<T, S> CollectionAccessor<T, S>
where
    T: Record + DeserializeOwned,
    S: RecordSource,
{
    /// Fetch the collection, replace the cache with it and return it.
    ///
    /// Records keep the order the source served them in; duplicates are kept.
    ///
    /// # Errors
    ///
    /// - [`AccessorError::Transport`] if the request could not complete or the
    ///   response status was not 2xx
    /// - [`AccessorError::Format`] if the body is not a JSON array, an element
    ///   does not decode as `T`, or a record fails the validator
    ///
    /// The cache is unchanged when an error is returned.
    pub async fn fetch_all(&self) -> Result<Arc<Vec<T>>, AccessorError> {
        let _serialized = self.fetch_lock.lock().await;
        debug!("Fetching collection from {}", self.source_url);

        let body = self.source.fetch(&self.source_url).await.inspect_err(|e| {
            warn!("Fetch from {} failed: {}", self.source_url, e);
        })?;

        let items = decode_records(&self.source_url, &body, self.validator).inspect_err(|e| {
            warn!("Rejected response from {}: {}", self.source_url, e);
        })?;

        let items = Arc::new(items);
        self.replace_cache(Arc::clone(&items));
        debug!("Cached {} records from {}", items.len(), self.source_url);

        Ok(items)
    }
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode a response body into records, all-or-nothing.
///
/// A leading UTF-8 byte order mark is ignored.
fn decode_records<T>(
    url: &str,
    body: &[u8],
    validator: Option<Validator<T>>,
) -> Result<Vec<T>, AccessorError>
where
    T: Record + DeserializeOwned,
{
    let body = body.strip_prefix(UTF8_BOM).unwrap_or(body);
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AccessorError::format(url, format!("invalid JSON: {e}")))?;

    let elements = match value {
        Value::Array(elements) => elements,
        other => {
            return Err(AccessorError::format(
                url,
                format!("expected a JSON array, got {}", describe_json(&other)),
            ));
        }
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            let record: T = serde_json::from_value(element).map_err(|e| {
                AccessorError::format(url, format!("record at index {index}: {e}"))
            })?;

            if let Some(validate) = validator {
                if !validate(&record) {
                    return Err(AccessorError::format(
                        url,
                        format!("record #{} at index {index} failed validation", record.id()),
                    ));
                }
            }

            Ok(record)
        })
        .collect()
}

fn describe_json(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
