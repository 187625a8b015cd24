//! Where record bodies come from.
//!
//! The accessor only needs "GET this URL and hand me the body, or tell me the
//! request failed". [`RecordSource`] is that contract; [`HttpSource`] fulfils it
//! with `reqwest`.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::config::HttpSettings;
use crate::core::AccessorError;

/// Future returned by [`RecordSource::fetch`].
pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<u8>, AccessorError>> + Send + 'a>>;

/// A remote location that can produce the raw body of a record collection.
///
/// Implementations return [`AccessorError::Transport`] when the request cannot
/// complete. Interpreting the body is the accessor's job, so sources never
/// return [`AccessorError::Format`].
pub trait RecordSource: Send + Sync {
    /// Fetch the body served at `url`.
    fn fetch<'a>(&'a self, url: &'a str) -> FetchFuture<'a>;
}

impl<S: RecordSource + ?Sized> RecordSource for Arc<S> {
    fn fetch<'a>(&'a self, url: &'a str) -> FetchFuture<'a> {
        (**self).fetch(url)
    }
}

/// [`RecordSource`] backed by a `reqwest` HTTP client.
///
/// Each fetch is a single `GET` with `Accept: application/json`. Any response
/// outside the 2xx range is a transport failure carrying the status code.
///
/// # Examples
///
/// ```rust,no_run
/// use catalog_cli::accessor::{HttpSource, RecordSource};
///
/// # async fn example() -> anyhow::Result<()> {
/// let source = HttpSource::new();
/// let body = source.fetch("https://example.com/products.json").await?;
/// println!("{} bytes", body.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpSource {
    /// HTTP source with `reqwest`'s default client settings (no timeout).
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// HTTP source configured from the `[http]` section of the config file.
    ///
    /// A `timeout_secs` of zero leaves requests without a timeout.
    pub fn from_settings(settings: &HttpSettings) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(settings.user_agent.clone());
        if settings.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(settings.timeout_secs));
        }

        let client = builder.build().context("Failed to build HTTP client")?;
        Ok(Self {
            client,
        })
    }

    /// HTTP source around an already configured client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
        }
    }
}

impl RecordSource for HttpSource {
    fn fetch<'a>(&'a self, url: &'a str) -> FetchFuture<'a> {
        Box::pin(async move {
            debug!("GET {}", url);

            let response = self
                .client
                .get(url)
                .header(reqwest::header::ACCEPT, "application/json")
                .send()
                .await
                .map_err(|e| AccessorError::transport(url, describe_request_error(&e)))?;

            let status = response.status();
            if !status.is_success() {
                warn!("GET {} returned HTTP {}", url, status);
                return Err(AccessorError::status(url, status.as_u16(), format!("HTTP {status}")));
            }

            let body = response.bytes().await.map_err(|e| {
                AccessorError::transport(url, format!("failed to read response body: {e}"))
            })?;

            debug!("GET {} -> {} bytes", url, body.len());
            Ok(body.to_vec())
        })
    }
}

fn describe_request_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        format!("connection failed: {error}")
    } else if error.is_builder() {
        format!("invalid request: {error}")
    } else {
        error.to_string()
    }
}
