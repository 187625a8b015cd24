//! In-memory [`RecordSource`] with scripted replies.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::accessor::{FetchFuture, RecordSource};
use crate::core::AccessorError;

struct Reply {
    delay: Option<Duration>,
    result: Result<Vec<u8>, AccessorError>,
}

/// Replies to fetches from a queue, one entry per call, in call order.
///
/// A fetch with no scripted reply left fails with a transport error.
///
/// ```rust
/// use catalog_cli::accessor::CollectionAccessor;
/// use catalog_cli::models::Customer;
/// use catalog_cli::test_utils::StubSource;
///
/// # async fn example() {
/// let source = StubSource::new().body(r#"[{"id":1,"name":"Ada"}]"#);
/// let customers = CollectionAccessor::<Customer, _>::with_source("stub://customers", source);
/// customers.fetch_all().await.unwrap();
/// assert_eq!(customers.find_by_id(1).unwrap().name, "Ada");
/// # }
/// ```
#[derive(Default)]
pub struct StubSource {
    replies: Mutex<VecDeque<Reply>>,
    calls: AtomicUsize,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    #[must_use]
    pub fn body(self, body: impl AsRef<[u8]>) -> Self {
        self.push(None, Ok(body.as_ref().to_vec()))
    }

    /// Queue a successful reply delivered after `delay`.
    #[must_use]
    pub fn delayed_body(self, delay: Duration, body: impl AsRef<[u8]>) -> Self {
        self.push(Some(delay), Ok(body.as_ref().to_vec()))
    }

    /// Queue a failure.
    #[must_use]
    pub fn failure(self, error: AccessorError) -> Self {
        self.push(None, Err(error))
    }

    /// Number of fetches made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(self, delay: Option<Duration>, result: Result<Vec<u8>, AccessorError>) -> Self {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(Reply {
                delay,
                result,
            });
        }
        self
    }
}

impl RecordSource for StubSource {
    fn fetch<'a>(&'a self, url: &'a str) -> FetchFuture<'a> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.replies.lock().ok().and_then(|mut replies| replies.pop_front());

        Box::pin(async move {
            let Some(reply) = reply else {
                return Err(AccessorError::transport(url, "no stubbed reply left"));
            };
            if let Some(delay) = reply.delay {
                tokio::time::sleep(delay).await;
            }
            reply.result
        })
    }
}
