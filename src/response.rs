//! Decoding of service responses.
//!
//! A raw [`HttpResponse`] is consumed by [`check_response`], which either
//! returns a [`CheckedResponse`] or the error the response describes. The
//! body is parsed once, and nothing from an unchecked response reaches the
//! caller.
//!
//! ## Decision Order
//!
//! 1. The body must parse as JSON, else [`ErrorKind::InternalDecode`].
//! 2. A top-level `errors` key means the service failed; its first entry
//!    becomes [`ErrorKind::Service`] or [`ErrorKind::UnknownService`].
//! 3. A 4xx/5xx status without an envelope becomes [`ErrorKind::Http`].
//! 4. Anything else is a success.
//!
//! [`ErrorKind::InternalDecode`]: crate::ErrorKind::InternalDecode
//! [`ErrorKind::Service`]: crate::ErrorKind::Service
//! [`ErrorKind::UnknownService`]: crate::ErrorKind::UnknownService
//! [`ErrorKind::Http`]: crate::ErrorKind::Http

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::transport::HttpResponse;
use crate::{Error, Result, ServiceErrorCode};

/// A response that passed [`check_response`].
#[derive(Debug, Clone)]
pub struct CheckedResponse {
    status: u16,
    headers: HashMap<String, String>,
    data: Value,
}

impl CheckedResponse {
    /// Returns the HTTP status.
    #[inline]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns a response header by lowercase name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Returns all response headers.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Returns the decoded body.
    #[inline]
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Consumes the response, returning the decoded body.
    #[inline]
    pub fn into_data(self) -> Value {
        self.data
    }
}

/// Decodes a raw response into a success body or a typed error.
///
/// # Errors
///
/// See the [module documentation](self) for the order in which failures are
/// detected.
pub fn check_response(response: HttpResponse) -> Result<CheckedResponse> {
    let HttpResponse { status, reason, headers, body } = response;

    let data: Value = match serde_json::from_str(&body) {
        Ok(data) => data,
        Err(err) => {
            tracing::error!(status, error = %err, "response body is not valid JSON");
            return Err(Error::from(err).with_status(status));
        }
    };

    if let Some(envelope) = data.get("errors") {
        return Err(decode_envelope(envelope)?.with_status(status));
    }

    if (400..=599).contains(&status) {
        let reason = reason.unwrap_or_else(|| format!("HTTP {}", status));
        return Err(Error::http(status, reason));
    }

    Ok(CheckedResponse { status, headers, data })
}

/// One entry of an `errors` envelope.
#[derive(Debug, Deserialize)]
struct EnvelopeEntry {
    code: i64,
    #[serde(default)]
    message: Option<Value>,
    #[serde(rename = "more-info", default)]
    more_info: Option<Value>,
}

/// Builds the error described by an `errors` envelope.
///
/// Returns `Err` when the envelope itself is malformed.
fn decode_envelope(envelope: &Value) -> Result<Error> {
    let entries = Vec::<EnvelopeEntry>::deserialize(envelope).map_err(|err| {
        tracing::error!(error = %err, "error envelope does not match the expected shape");
        Error::internal_decode("error envelope must be a list of entries with an integer 'code'")
            .with_source(err)
    })?;

    let Some(first) = entries.into_iter().next() else {
        tracing::error!("error envelope is empty");
        return Err(Error::internal_decode("error envelope must be a non-empty array"));
    };

    let message = first
        .message
        .as_ref()
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();

    let mut err = match ServiceErrorCode::from_code(first.code) {
        Some(known) => Error::service(known, message),
        None => Error::unknown_service(first.code, message),
    };

    if let Some(more_info) = first.more_info {
        let more_info = match more_info {
            Value::String(text) => text,
            other => other.to_string(),
        };
        err = err.with_more_info(more_info);
    }

    Ok(err)
}
