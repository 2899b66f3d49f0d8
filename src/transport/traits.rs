//! The HTTP seam between the dispatcher and the network.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use futures::future::BoxFuture;
use url::Url;

use crate::Error;

/// Future returned by [`HttpTransport::execute`].
pub type TransportFuture<'a> = BoxFuture<'a, Result<HttpResponse, Error>>;

/// HTTP method of an outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl Method {
    /// Returns the method name.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully prepared request.
///
/// Header names are lowercase. The `authorization` header holds the raw API
/// key, so `Debug` redacts it.
#[derive(Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL.
    pub url: Url,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// Request body, if any.
    pub body: Option<String>,
    /// Time allowed for the whole exchange.
    pub timeout: Duration,
}

impl HttpRequest {
    /// Returns a header value by lowercase name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: HashMap<&str, &str> = self
            .headers
            .iter()
            .map(|(name, value)| {
                let value = if name == "authorization" { "[REDACTED]" } else { value.as_str() };
                (name.as_str(), value)
            })
            .collect();
        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("headers", &headers)
            .field("body", &self.body)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// A raw response that has not been checked for errors yet.
///
/// The only way to reach the body as JSON is
/// [`check_response`](crate::response::check_response).
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Reason phrase, when the transport knows it.
    pub reason: Option<String>,
    /// Response headers, names lowercased.
    pub headers: HashMap<String, String>,
    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    /// Creates a response with no headers.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, reason: None, headers: HashMap::new(), body: body.into() }
    }

    /// Sets the reason phrase.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers.insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }
}

/// Sends requests over the network.
///
/// Implementations map their own failures onto
/// [`ErrorKind::Timeout`](crate::ErrorKind::Timeout),
/// [`ErrorKind::Connection`](crate::ErrorKind::Connection) or
/// [`ErrorKind::Transport`](crate::ErrorKind::Transport). Any HTTP status,
/// including 4xx and 5xx, is a successful exchange and must be returned as an
/// [`HttpResponse`].
///
/// ## Example
///
/// ```rust
/// use slicingdice::transport::{HttpRequest, HttpResponse, HttpTransport, TransportFuture};
///
/// struct AlwaysEmpty;
///
/// impl HttpTransport for AlwaysEmpty {
///     fn execute(&self, _request: HttpRequest) -> TransportFuture<'_> {
///         Box::pin(async { Ok(HttpResponse::new(200, "{}")) })
///     }
/// }
/// ```
pub trait HttpTransport: Send + Sync {
    /// Executes one request.
    fn execute(&self, request: HttpRequest) -> TransportFuture<'_>;
}
