//! Service endpoint configuration.

use std::time::Duration;

use url::Url;

use crate::{Error, Result};

/// Base URL used when neither the builder nor the environment sets one.
pub const DEFAULT_BASE_URL: &str = "https://api.slicingdice.com/v1";

/// Environment variable that overrides [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "SD_API_ADDRESS";

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Where and how requests are sent.
///
/// ## Example
///
/// ```rust
/// use std::time::Duration;
/// use slicingdice::EndpointConfig;
///
/// let config = EndpointConfig::builder()
///     .base_url("http://localhost:8080/v1")
///     .use_test_endpoint(true)
///     .timeout(Duration::from_secs(5))
///     .build();
///
/// let url = config.url_for("/query/count/entity/", config.use_test_endpoint).unwrap();
/// assert_eq!(url.as_str(), "http://localhost:8080/v1/test/query/count/entity/");
/// ```
#[derive(Debug, Clone, bon::Builder)]
pub struct EndpointConfig {
    /// Base URL, without the test segment.
    #[builder(into, default = DEFAULT_BASE_URL.to_owned())]
    pub base_url: String,

    /// Whether calls go to the test endpoint unless overridden per call.
    #[builder(default = false)]
    pub use_test_endpoint: bool,

    /// Per-request timeout handed to the transport.
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl EndpointConfig {
    /// Creates a configuration whose base URL comes from `SD_API_ADDRESS`,
    /// falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        Self::with_base_override(std::env::var(BASE_URL_ENV).ok())
    }

    fn with_base_override(base_url: Option<String>) -> Self {
        match base_url.filter(|value| !value.trim().is_empty()) {
            Some(base_url) => Self::builder().base_url(base_url).build(),
            None => Self::default(),
        }
    }

    /// Validates the base URL.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL does not parse or is not
    /// `http`/`https`.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(Error::configuration(format!(
                "unsupported URL scheme '{}', expected http or https",
                scheme
            ))),
        }
    }

    /// Builds the full URL for an endpoint path.
    ///
    /// With `test` set, `/test` is inserted between the base and the path.
    pub fn url_for(&self, path: &str, test: bool) -> Result<Url> {
        let base = self.base_url.trim_end_matches('/');
        let full = if test {
            format!("{}/test{}", base, path)
        } else {
            format!("{}{}", base, path)
        };
        Ok(Url::parse(&full)?)
    }
}
