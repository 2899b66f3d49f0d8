//! Client builder with typestate pattern.

use std::{marker::PhantomData, sync::Arc, time::Duration};

use super::inner::ClientInner;
#[cfg(feature = "rest")]
use crate::transport::RestTransport;
use crate::{
    Client, Error,
    auth::{ApiKey, Credentials},
    config::EndpointConfig,
    transport::HttpTransport,
};

/// Marker type: Credentials not yet provided.
pub struct NoCredentials;

/// Marker type: Credentials have been provided.
pub struct HasCredentials;

/// Builder for creating [`Client`] instances.
///
/// Uses the typestate pattern so a client cannot be built without
/// credentials.
///
/// ## Required Configuration
///
/// - `credentials()` or `api_key()`: the keys to authenticate with
///
/// ## Optional Configuration
///
/// - `base_url()`: service URL (default: `SD_API_ADDRESS`, then
///   `https://api.slicingdice.com/v1`)
/// - `use_test_endpoint()`: send calls to the test endpoint by default
/// - `timeout()`: per-request timeout (default: 60 seconds)
/// - `endpoint_config()`: all of the above at once
///
/// ## Example
///
/// ```rust
/// use std::time::Duration;
/// use slicingdice::{Client, Credentials};
///
/// let client = Client::builder()
///     .credentials(Credentials::new().with_master_key("master-key"))
///     .base_url("http://localhost:8080/v1")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok::<(), slicingdice::Error>(())
/// ```
pub struct ClientBuilder<CredentialsState> {
    credentials: Option<Credentials>,
    endpoint: Option<EndpointConfig>,
    base_url: Option<String>,
    use_test_endpoint: Option<bool>,
    timeout: Option<Duration>,
    _credentials_state: PhantomData<CredentialsState>,
}

impl ClientBuilder<NoCredentials> {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            credentials: None,
            endpoint: None,
            base_url: None,
            use_test_endpoint: None,
            timeout: None,
            _credentials_state: PhantomData,
        }
    }

    /// Sets the API keys.
    ///
    /// Accepts a [`Credentials`] set or a single [`ApiKey`].
    pub fn credentials(self, credentials: impl Into<Credentials>) -> ClientBuilder<HasCredentials> {
        ClientBuilder {
            credentials: Some(credentials.into()),
            endpoint: self.endpoint,
            base_url: self.base_url,
            use_test_endpoint: self.use_test_endpoint,
            timeout: self.timeout,
            _credentials_state: PhantomData,
        }
    }

    /// Sets a single API key.
    pub fn api_key(self, key: ApiKey) -> ClientBuilder<HasCredentials> {
        self.credentials(key)
    }
}

impl Default for ClientBuilder<NoCredentials> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> ClientBuilder<C> {
    /// Sets the full endpoint configuration.
    ///
    /// Individual settings (`base_url()`, `use_test_endpoint()`, `timeout()`)
    /// override the matching field regardless of call order.
    #[must_use]
    pub fn endpoint_config(mut self, config: EndpointConfig) -> Self {
        self.endpoint = Some(config);
        self
    }

    /// Sets the service base URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sends calls to the test endpoint unless a call overrides it.
    #[must_use]
    pub fn use_test_endpoint(mut self, enabled: bool) -> Self {
        self.use_test_endpoint = Some(enabled);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl ClientBuilder<HasCredentials> {
    /// Builds the client with the default reqwest transport.
    ///
    /// No request is made; credentials are checked on each call.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL is invalid or the HTTP
    /// client cannot be created.
    #[cfg(feature = "rest")]
    pub fn build(self) -> Result<Client, Error> {
        let transport = RestTransport::new()?;
        self.build_with_transport(Arc::new(transport))
    }

    /// Builds the client on top of a custom transport.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL is invalid.
    pub fn build_with_transport(self, transport: Arc<dyn HttpTransport>) -> Result<Client, Error> {
        let mut endpoint = self.endpoint.unwrap_or_else(EndpointConfig::from_env);
        if let Some(base_url) = self.base_url {
            endpoint.base_url = base_url;
        }
        if let Some(enabled) = self.use_test_endpoint {
            endpoint.use_test_endpoint = enabled;
        }
        if let Some(timeout) = self.timeout {
            endpoint.timeout = timeout;
        }
        endpoint.validate()?;

        let credentials = self.credentials.unwrap_or_default();
        if credentials.is_empty() {
            tracing::warn!("client built without a usable api key; every call will fail");
        }

        let test = endpoint.use_test_endpoint;
        Ok(Client::from_inner(ClientInner { credentials, endpoint, transport }, test))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::config::DEFAULT_TIMEOUT;
    use crate::testing::MockTransport;

    fn mock() -> Arc<dyn HttpTransport> {
        Arc::new(MockTransport::new())
    }

    #[test]
    fn test_defaults() {
        let client = Client::builder()
            .api_key(ApiKey::read("r"))
            .base_url("https://api.slicingdice.com/v1")
            .build_with_transport(mock())
            .unwrap();
        assert_eq!(client.base_url(), "https://api.slicingdice.com/v1");
        assert_eq!(client.timeout(), DEFAULT_TIMEOUT);
        assert!(!client.uses_test_endpoint());
    }

    #[test]
    fn test_overrides_win_over_endpoint_config() {
        let client = Client::builder()
            .timeout(Duration::from_secs(3))
            .credentials(Credentials::new().with_master_key("m"))
            .endpoint_config(
                EndpointConfig::builder()
                    .base_url("http://a.example/v1")
                    .timeout(Duration::from_secs(30))
                    .build(),
            )
            .use_test_endpoint(true)
            .build_with_transport(mock())
            .unwrap();
        assert_eq!(client.base_url(), "http://a.example/v1");
        assert_eq!(client.timeout(), Duration::from_secs(3));
        assert!(client.uses_test_endpoint());
    }

    #[test]
    fn test_invalid_base_url() {
        let err = Client::builder()
            .api_key(ApiKey::master("m"))
            .base_url("::not a url::")
            .build_with_transport(mock())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_empty_credentials_still_build() {
        let client = Client::builder()
            .credentials(Credentials::new())
            .base_url("http://localhost/v1")
            .build_with_transport(mock());
        assert!(client.is_ok());
    }

    #[cfg(feature = "rest")]
    #[test]
    fn test_build_with_rest_transport() {
        let client = Client::builder()
            .api_key(ApiKey::master("m"))
            .base_url("https://api.slicingdice.com/v1")
            .build();
        assert!(client.is_ok());
    }
}
