//! HTTP transport implementation using reqwest.

use std::collections::HashMap;
use std::sync::OnceLock;
use std::time::Duration;

use crate::Error;
use crate::transport::traits::{HttpRequest, HttpResponse, HttpTransport, Method, TransportFuture};

// ============================================================================
// REST Transport
// ============================================================================

/// Default [`HttpTransport`] backed by a shared `reqwest::Client`.
///
/// Every request carries the SDK User-Agent and its own timeout. Status codes
/// are passed through untouched; only network failures become errors.
#[derive(Clone)]
pub struct RestTransport {
    client: reqwest::Client,
}

impl std::fmt::Debug for RestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestTransport").finish_non_exhaustive()
    }
}

impl RestTransport {
    /// Creates a transport with a fresh `reqwest::Client`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent())
            .build()
            .map_err(|e| {
                Error::configuration(format!("Failed to create HTTP client: {}", e)).with_source(e)
            })?;
        Ok(Self { client })
    }

    /// Wraps an existing `reqwest::Client`.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .client
            .request(method, request.url)
            .timeout(request.timeout);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value.to_str().ok().map(|value| (name.as_str().to_owned(), value.to_owned()))
            })
            .collect();
        let body = response.text().await.map_err(map_reqwest_error)?;

        Ok(HttpResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().map(str::to_owned),
            headers,
            body,
        })
    }
}

impl HttpTransport for RestTransport {
    fn execute(&self, request: HttpRequest) -> TransportFuture<'_> {
        Box::pin(self.send(request))
    }
}

/// `slicingdice-rust/<version> (rust/<msrv>; <os>/<arch>)`, built once.
fn user_agent() -> &'static str {
    static USER_AGENT: OnceLock<String> = OnceLock::new();
    USER_AGENT.get_or_init(|| {
        let os = match std::env::consts::OS {
            "macos" => "darwin",
            os => os,
        };
        format!(
            "slicingdice-rust/{} (rust/{}; {}/{})",
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_RUST_VERSION"),
            os,
            std::env::consts::ARCH,
        )
    })
}

// ============================================================================
// Error Mapping
// ============================================================================

/// Maps reqwest errors to SDK errors.
fn map_reqwest_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::timeout(format!("Request timed out: {}", e)).with_source(e)
    } else if e.is_connect() {
        Error::connection(format!("Connection failed: {}", e)).with_source(e)
    } else {
        Error::transport(format!("HTTP error: {}", e)).with_source(e)
    }
}

// ============================================================================
// Tests
// ============================================================================
