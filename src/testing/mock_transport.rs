//! Recording transport with queued responses.

use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::Error;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, TransportFuture};

/// An in-memory [`HttpTransport`] for tests.
///
/// Every request is recorded. Responses are replayed in the order they were
/// queued; a request with nothing queued fails with a transport error.
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
/// use serde_json::json;
/// use slicingdice::testing::MockTransport;
/// use slicingdice::transport::HttpResponse;
/// use slicingdice::{Client, Credentials};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let transport = Arc::new(MockTransport::new());
/// transport.push_response(HttpResponse::new(200, r#"{"status": "success"}"#));
///
/// let client = Client::builder()
///     .credentials(Credentials::new().with_read_key("key"))
///     .base_url("http://localhost/v1")
///     .build_with_transport(transport.clone())
///     .unwrap();
///
/// client.count_entity(&json!({"q": {"query": []}})).await.unwrap();
/// assert_eq!(transport.request_count(), 1);
/// # }
/// ```
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<Result<HttpResponse, Error>>>,
}

impl MockTransport {
    /// Creates a transport with no queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response.
    pub fn push_response(&self, response: HttpResponse) {
        self.responses.lock().push_back(Ok(response));
    }

    /// Queues a transport failure.
    pub fn push_error(&self, error: Error) {
        self.responses.lock().push_back(Err(error));
    }

    /// Queues a response, builder style.
    #[must_use]
    pub fn with_response(self, response: HttpResponse) -> Self {
        self.push_response(response);
        self
    }

    /// Returns every recorded request, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    /// Returns the most recent request.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().last().cloned()
    }

    /// Returns the number of requests received.
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Returns the number of queued responses not yet consumed.
    pub fn pending_responses(&self) -> usize {
        self.responses.lock().len()
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("requests", &self.request_count())
            .field("pending_responses", &self.pending_responses())
            .finish()
    }
}

impl HttpTransport for MockTransport {
    fn execute(&self, request: HttpRequest) -> TransportFuture<'_> {
        self.requests.lock().push(request);
        let next = self.responses.lock().pop_front();
        Box::pin(async move {
            next.unwrap_or_else(|| Err(Error::transport("mock transport has no queued response")))
        })
    }
}
