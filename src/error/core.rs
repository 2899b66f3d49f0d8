//! Main error type for the SlicingDice SDK.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use super::{ErrorKind, ServiceErrorCode};

/// The primary error type for SlicingDice SDK operations.
///
/// `Error` carries enough context to act on a failure without re-parsing the
/// response:
/// - [`kind()`](Error::kind): Categorization for `match` statements
/// - [`code()`](Error::code): Raw numeric code reported by the service
/// - [`service_error()`](Error::service_error): The known code, if any
/// - [`more_info()`](Error::more_info): The service's `more-info` hint
/// - [`status()`](Error::status): HTTP status of the failed response
///
/// ## Error Hierarchy
///
/// ```text
/// Error
/// ├── kind: ErrorKind                      (category for matching)
/// ├── message: String                      (human-readable description)
/// ├── code: Option<i64>                    (raw service code)
/// ├── service_error: Option<ServiceErrorCode>
/// ├── more_info: Option<String>            (service documentation hint)
/// ├── status: Option<u16>                  (HTTP status)
/// └── source: Option                       (underlying cause)
/// ```
///
/// ## Example
///
/// ```rust
/// use slicingdice::{Error, ErrorKind, ServiceErrorCode};
///
/// fn handle_error(err: Error) {
///     match err.kind() {
///         ErrorKind::MissingCredential | ErrorKind::InsufficientPrivilege => {
///             println!("configure a key with the right privilege");
///         }
///         ErrorKind::Service => {
///             if err.service_error() == Some(ServiceErrorCode::ColumnAlreadyExists) {
///                 println!("column exists, nothing to do");
///             }
///         }
///         ErrorKind::UnknownService => {
///             println!("service code {:?}: {}", err.code(), err.message());
///         }
///         _ => println!("request failed: {}", err),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    /// The error category.
    kind: ErrorKind,

    /// Human-readable error message.
    message: Cow<'static, str>,

    /// Raw code from the service's error envelope.
    code: Option<i64>,

    /// Known service code, when `code` is in the table.
    service_error: Option<ServiceErrorCode>,

    /// `more-info` text from the error envelope.
    more_info: Option<String>,

    /// HTTP status of the response that produced this error.
    status: Option<u16>,

    /// The underlying error, if any.
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl Error {
    /// Creates a new error with the given kind and message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slicingdice::{Error, ErrorKind};
    ///
    /// let err = Error::new(ErrorKind::InvalidPayload, "column name is required");
    /// assert_eq!(err.kind(), ErrorKind::InvalidPayload);
    /// ```
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
            service_error: None,
            more_info: None,
            status: None,
            source: None,
        }
    }

    /// Creates an error from a kind with a default message.
    pub fn from_kind(kind: ErrorKind) -> Self {
        let message = match kind {
            ErrorKind::MissingCredential => "no api key configured",
            ErrorKind::InsufficientPrivilege => "api key lacks the required privilege",
            ErrorKind::InvalidPayload => "invalid query, please check the docs",
            ErrorKind::QuotaExceeded => "request exceeds a per-request limit",
            ErrorKind::InternalDecode => "response body could not be decoded",
            ErrorKind::Service => "service reported an error",
            ErrorKind::UnknownService => "service reported an unknown error",
            ErrorKind::Http => "http request failed",
            ErrorKind::Timeout => "request timed out",
            ErrorKind::Connection => "connection failed",
            ErrorKind::Transport => "transport error",
            ErrorKind::Configuration => "configuration error",
        };
        Self::new(kind, message)
    }

    /// Returns the error kind for categorization.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the human-readable message.
    ///
    /// For service errors this is the message from the error envelope.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the raw numeric code reported by the service, if any.
    ///
    /// Present for both [`ErrorKind::Service`] and
    /// [`ErrorKind::UnknownService`].
    #[inline]
    pub fn code(&self) -> Option<i64> {
        self.code
    }

    /// Returns the known service code, if the service reported one.
    ///
    /// ```rust
    /// use slicingdice::{Error, ServiceErrorCode};
    ///
    /// let err = Error::service(ServiceErrorCode::ColumnAlreadyExists, "Column already exists");
    /// assert_eq!(err.service_error(), Some(ServiceErrorCode::ColumnAlreadyExists));
    /// assert_eq!(err.code(), Some(43));
    /// ```
    #[inline]
    pub fn service_error(&self) -> Option<ServiceErrorCode> {
        self.service_error
    }

    /// Returns the `more-info` text from the error envelope, if present.
    #[inline]
    pub fn more_info(&self) -> Option<&str> {
        self.more_info.as_deref()
    }

    /// Returns the HTTP status of the failed response, if one was received.
    #[inline]
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Returns `true` if this error is generally safe to retry.
    ///
    /// Transport timeouts and connection failures qualify, as do service codes
    /// flagged by [`ServiceErrorCode::is_retriable`]. The SDK itself never
    /// retries.
    pub fn is_retriable(&self) -> bool {
        self.kind.is_retriable() || self.service_error.is_some_and(ServiceErrorCode::is_retriable)
    }

    /// Sets the raw service code.
    #[must_use]
    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    /// Sets the `more-info` text.
    #[must_use]
    pub fn with_more_info(mut self, more_info: impl Into<String>) -> Self {
        self.more_info = Some(more_info.into());
        self
    }

    /// Sets the HTTP status.
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the source error for this error.
    #[must_use]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors for common error types

    /// Creates a missing credential error.
    pub fn missing_credential(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::MissingCredential, message)
    }

    /// Creates an insufficient privilege error.
    pub fn insufficient_privilege(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InsufficientPrivilege, message)
    }

    /// Creates an invalid payload error.
    pub fn invalid_payload(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidPayload, message)
    }

    /// Creates a quota exceeded error.
    pub fn quota_exceeded(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::QuotaExceeded, message)
    }

    /// Creates an internal decode error.
    pub fn internal_decode(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalDecode, message)
    }

    /// Creates an error for a known service code.
    pub fn service(code: ServiceErrorCode, message: impl Into<Cow<'static, str>>) -> Self {
        let mut err = Self::new(ErrorKind::Service, message).with_code(i64::from(code.code()));
        err.service_error = Some(code);
        err
    }

    /// Creates an error for a service code missing from the table.
    pub fn unknown_service(code: i64, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::UnknownService, message).with_code(code)
    }

    /// Creates an HTTP status error.
    pub fn http(status: u16, reason: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Http, reason).with_status(status)
    }

    /// Creates a timeout error.
    pub fn timeout(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Timeout, message)
    }

    /// Creates a connection error.
    pub fn connection(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Connection, message)
    }

    /// Creates a transport error.
    pub fn transport(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;

        if let Some(code) = self.code {
            write!(f, " (code: {})", code)?;
        }

        if let Some(status) = self.status {
            write!(f, " (status: {})", status)?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::configuration(format!("invalid URL: {}", err)).with_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::internal_decode(format!("JSON error: {}", err)).with_source(err)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_error_new() {
        let err = Error::new(ErrorKind::InvalidPayload, "test message");
        assert_eq!(err.kind(), ErrorKind::InvalidPayload);
        assert_eq!(err.message(), "test message");
        assert!(err.to_string().contains("test message"));
        assert!(err.code().is_none());
        assert!(err.service_error().is_none());
        assert!(err.more_info().is_none());
        assert!(err.status().is_none());
    }

    #[test]
    fn test_error_from_kind() {
        let err = Error::from_kind(ErrorKind::MissingCredential);
        assert_eq!(err.kind(), ErrorKind::MissingCredential);
        assert!(err.to_string().contains("no api key configured"));
    }

    #[test]
    fn test_service_error_carries_code() {
        let err = Error::service(ServiceErrorCode::ColumnAlreadyExists, "Column already exists")
            .with_more_info("https://docs.slicingdice.com/docs/api-errors")
            .with_status(400);
        assert_eq!(err.kind(), ErrorKind::Service);
        assert_eq!(err.code(), Some(43));
        assert_eq!(err.service_error(), Some(ServiceErrorCode::ColumnAlreadyExists));
        assert_eq!(err.more_info(), Some("https://docs.slicingdice.com/docs/api-errors"));
        assert_eq!(err.status(), Some(400));
        assert!(err.to_string().contains("code: 43"));
    }

    #[test]
    fn test_unknown_service_error() {
        let err = Error::unknown_service(9999, "something new");
        assert_eq!(err.kind(), ErrorKind::UnknownService);
        assert_eq!(err.code(), Some(9999));
        assert!(err.service_error().is_none());
    }

    #[test]
    fn test_http_error() {
        let err = Error::http(503, "Service Unavailable");
        assert_eq!(err.kind(), ErrorKind::Http);
        assert_eq!(err.status(), Some(503));
        assert!(err.to_string().contains("status: 503"));
    }

    #[test]
    fn test_error_is_retriable() {
        assert!(Error::from_kind(ErrorKind::Timeout).is_retriable());
        assert!(Error::from_kind(ErrorKind::Connection).is_retriable());
        assert!(Error::service(ServiceErrorCode::RequestRateLimited, "slow down").is_retriable());
        assert!(!Error::service(ServiceErrorCode::ColumnAlreadyExists, "exists").is_retriable());
        assert!(!Error::from_kind(ErrorKind::QuotaExceeded).is_retriable());
    }

    #[test]
    fn test_error_with_source() {
        let io_err = std::io::Error::other("underlying error");
        let err = Error::connection("connection failed").with_source(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(Error::missing_credential("t").kind(), ErrorKind::MissingCredential);
        assert_eq!(Error::insufficient_privilege("t").kind(), ErrorKind::InsufficientPrivilege);
        assert_eq!(Error::invalid_payload("t").kind(), ErrorKind::InvalidPayload);
        assert_eq!(Error::quota_exceeded("t").kind(), ErrorKind::QuotaExceeded);
        assert_eq!(Error::internal_decode("t").kind(), ErrorKind::InternalDecode);
        assert_eq!(Error::timeout("t").kind(), ErrorKind::Timeout);
        assert_eq!(Error::connection("t").kind(), ErrorKind::Connection);
        assert_eq!(Error::transport("t").kind(), ErrorKind::Transport);
        assert_eq!(Error::configuration("t").kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert_eq!(err.kind(), ErrorKind::InternalDecode);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_url_parse_error() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        let err: Error = url_err.into();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.message().contains("invalid URL"));
    }
}
