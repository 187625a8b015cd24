//! Local axum server for exercising [`HttpSource`](crate::accessor::HttpSource).
//!
//! Every request, whatever its path, is answered from a queue of canned
//! responses in order. Once only one response is left it is repeated.

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::warn;

/// A canned HTTP response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
    pub delay: Option<Duration>,
}

impl MockResponse {
    /// `200 OK` with a JSON body.
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: body.into(),
            delay: None,
        }
    }

    /// `200 OK` with a plain text body.
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            content_type: "text/plain",
            ..Self::json(body)
        }
    }

    /// Arbitrary status with a plain text body.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            ..Self::text(body)
        }
    }

    /// Wait `delay` before answering.
    #[must_use]
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl IntoResponse for MockResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(header::CONTENT_TYPE, self.content_type)], self.body).into_response()
    }
}

/// A request as received by [`MockServer`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
}

impl RecordedRequest {
    /// Value of header `name`, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

#[derive(Clone, Default)]
struct ServerState {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// axum server bound to an ephemeral port on `127.0.0.1`.
///
/// The server stops when dropped.
pub struct MockServer {
    addr: SocketAddr,
    state: ServerState,
    handle: JoinHandle<()>,
}

impl MockServer {
    /// Start serving `responses`.
    pub async fn start(responses: Vec<MockResponse>) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = ServerState {
            responses: Arc::new(Mutex::new(responses.into())),
            ..ServerState::default()
        };

        let app = Router::new().fallback(respond).with_state(state.clone());
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                warn!("Mock server on {} stopped: {}", addr, e);
            }
        });

        Ok(Self {
            addr,
            state,
            handle,
        })
    }

    /// Full URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.state.requests.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn respond(
    State(state): State<ServerState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> MockResponse {
    state.requests.lock().unwrap_or_else(PoisonError::into_inner).push(RecordedRequest {
        method,
        uri,
        headers,
    });

    let response = {
        let mut responses = state.responses.lock().unwrap_or_else(PoisonError::into_inner);
        next_response(&mut responses)
    };

    if let Some(delay) = response.delay {
        tokio::time::sleep(delay).await;
    }
    response
}

fn next_response(queue: &mut VecDeque<MockResponse>) -> MockResponse {
    if queue.len() > 1 {
        if let Some(response) = queue.pop_front() {
            return response;
        }
    }
    queue.front().cloned().unwrap_or_else(|| MockResponse::status(404, "no response configured"))
}

/// A `http://` URL on which nothing is listening.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/unreachable")
}
