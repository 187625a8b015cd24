//! Test utilities for catalog
//!
//! Helpers shared by unit tests and the integration suite:
//! - [`init_test_logging`] - one-time tracing setup for tests
//! - [`MockServer`] - a local axum server serving canned responses
//! - [`StubSource`] - an in-memory [`RecordSource`](crate::accessor::RecordSource)
//! - [`fixtures`] - sample record collections as JSON
//!
//! # Example
//!
//! ```rust,no_run
//! use catalog_cli::accessor::CollectionAccessor;
//! use catalog_cli::models::Product;
//! use catalog_cli::test_utils::{MockResponse, MockServer, fixtures};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let server = MockServer::start(vec![MockResponse::json(fixtures::PRODUCTS)]).await?;
//! let products = CollectionAccessor::<Product>::new(server.url("/products"));
//! products.fetch_all().await?;
//! assert!(products.find_by_id(10).is_some());
//! # Ok(())
//! # }
//! ```

pub mod fixtures;
mod mock_server;
mod stub_source;

pub use mock_server::{MockResponse, MockServer, RecordedRequest, unreachable_url};
pub use stub_source::StubSource;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Send `tracing` output to the test harness, once per process.
///
/// `level` wins over `RUST_LOG`; with neither, no subscriber is installed.
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = match level {
            Some(level) => EnvFilter::new(level.to_string()),
            None => match EnvFilter::try_from_default_env() {
                Ok(filter) => filter,
                Err(_) => return,
            },
        };

        let subscriber = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer();
        if let Err(e) = subscriber.try_init() {
            eprintln!("test logging not installed: {e}");
        }
    });
}
