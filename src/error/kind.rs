//! Error kind enumeration for categorizing SDK errors.

/// Categorization of SDK errors.
///
/// This enum provides a stable interface for matching on error types. The SDK
/// never retries on its own; callers match on the kind to decide.
///
/// ## Where Each Kind Comes From
///
/// | ErrorKind               | Raised by              | Network call made? |
/// |-------------------------|------------------------|--------------------|
/// | `MissingCredential`     | credential resolver    | No                 |
/// | `InsufficientPrivilege` | credential resolver    | No                 |
/// | `InvalidPayload`        | request validators     | No                 |
/// | `QuotaExceeded`         | request validators     | No                 |
/// | `InternalDecode`        | response decoder       | Yes                |
/// | `Service`               | response decoder       | Yes                |
/// | `UnknownService`        | response decoder       | Yes                |
/// | `Http`                  | response decoder       | Yes                |
/// | `Timeout`               | transport              | Attempted          |
/// | `Connection`            | transport              | Attempted          |
/// | `Transport`             | transport              | Attempted          |
/// | `Configuration`         | client construction    | No                 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// No API key is configured on the client.
    #[error("missing credential")]
    MissingCredential,

    /// The resolved API key may not perform the requested operation.
    ///
    /// Write keys cannot read and read keys cannot write; only master and
    /// custom keys pass every check.
    #[error("insufficient privilege")]
    InsufficientPrivilege,

    /// The request payload is structurally invalid.
    #[error("invalid payload")]
    InvalidPayload,

    /// The request payload exceeds a per-request quota (too many queries,
    /// columns, ids, ...).
    #[error("quota exceeded")]
    QuotaExceeded,

    /// The response body could not be decoded.
    #[error("internal decode error")]
    InternalDecode,

    /// The service reported a known error code.
    ///
    /// Use [`Error::service_error()`](crate::Error::service_error) for the
    /// precise code.
    #[error("service error")]
    Service,

    /// The service reported an error code this SDK does not know.
    #[error("unknown service error")]
    UnknownService,

    /// The service answered with a 4xx/5xx status and no error envelope.
    #[error("http error")]
    Http,

    /// The request timed out in the transport.
    #[error("timeout")]
    Timeout,

    /// Connection error (DNS, TLS handshake, network unreachable).
    #[error("connection error")]
    Connection,

    /// Other transport-level failure.
    #[error("transport error")]
    Transport,

    /// Configuration error (invalid URL, unusable token).
    #[error("configuration error")]
    Configuration,
}

impl ErrorKind {
    /// Returns `true` if this error kind is raised before any request is sent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slicingdice::ErrorKind;
    ///
    /// assert!(ErrorKind::QuotaExceeded.is_local());
    /// assert!(!ErrorKind::Service.is_local());
    /// ```
    #[inline]
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ErrorKind::MissingCredential
                | ErrorKind::InsufficientPrivilege
                | ErrorKind::InvalidPayload
                | ErrorKind::QuotaExceeded
                | ErrorKind::Configuration
        )
    }

    /// Returns `true` if this error kind is generally safe to retry.
    ///
    /// Only transport failures qualify at the kind level. Service errors
    /// are refined by [`ServiceErrorCode::is_retriable`](crate::ServiceErrorCode::is_retriable).
    #[inline]
    pub fn is_retriable(&self) -> bool {
        matches!(self, ErrorKind::Timeout | ErrorKind::Connection)
    }
}
