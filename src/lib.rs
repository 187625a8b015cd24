//! catalog - fetch, cache and look up remote JSON record collections
//!
//! The heart of the crate is [`accessor::CollectionAccessor`]: bound to one URL,
//! it fetches the JSON array served there, keeps the decoded records in memory
//! and answers lookups by numeric id from that cache.
//!
//! # Modules
//!
//! - [`accessor`] - the accessor, the [`accessor::RecordSource`] seam and its
//!   HTTP implementation
//! - [`core`] - the [`core::Record`] capability and error types
//! - [`models`] - ready-made record types (products, customers, schema-less)
//! - [`config`] - the TOML configuration file (named sources, HTTP settings)
//! - [`cli`] - the `catalog` command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use catalog_cli::accessor::CollectionAccessor;
//! use catalog_cli::models::Product;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let products = CollectionAccessor::<Product>::new("https://example.com/api/products.json")
//!     .with_validator(Product::is_valid);
//!
//! for product in products.fetch_all().await?.iter() {
//!     println!("#{} {}", product.id, product.name);
//! }
//!
//! assert!(products.find_by_id(999).is_none());
//! # Ok(())
//! # }
//! ```
//!
//! # Command-Line Usage
//!
//! ```bash
//! catalog list https://example.com/api/products.json
//! catalog show products 10 --format json
//! catalog config add-source customers https://example.com/api/customers.json
//! ```

pub mod accessor;
pub mod cli;
pub mod config;
pub mod core;
pub mod models;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
