//! Internal client implementation: the request pipeline.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::auth::Credentials;
use crate::config::EndpointConfig;
use crate::operation::Operation;
use crate::response::{CheckedResponse, check_response};
use crate::transport::{HttpRequest, HttpTransport};
use crate::{Error, Result};

const JSON_CONTENT_TYPE: &str = "application/json";
const SQL_CONTENT_TYPE: &str = "application/sql";

/// What goes in the request body.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Payload<'a> {
    /// No body.
    Empty,
    /// A JSON document, checked by the operation's payload rule.
    Json(&'a Value),
    /// A raw SQL statement, sent verbatim.
    Sql(&'a str),
}

pub(crate) struct ClientInner {
    /// Configured API keys.
    pub credentials: Credentials,

    /// Base URL, default test toggle and timeout.
    pub endpoint: EndpointConfig,

    /// Sends the prepared requests.
    pub transport: Arc<dyn HttpTransport>,
}

impl ClientInner {
    /// Runs one call: authorize, validate, send, decode.
    ///
    /// Authorization and validation failures return before the transport is
    /// touched.
    pub(crate) async fn dispatch(
        &self,
        operation: Operation,
        payload: Payload<'_>,
        name: Option<&str>,
        test: bool,
    ) -> Result<CheckedResponse> {
        let descriptor = operation.descriptor();

        let key = self.credentials.authorize(descriptor.level).inspect_err(|err| {
            tracing::warn!(%operation, kind = %err.kind(), "request rejected by credential check");
        })?;

        if let Payload::Json(body) = payload {
            descriptor.rule.apply(body).inspect_err(|err| {
                tracing::warn!(%operation, kind = %err.kind(), error = %err.message(), "request rejected by payload check");
            })?;
        }

        let path = match name {
            Some(name) if name.trim().is_empty() => {
                tracing::warn!(%operation, "request rejected: empty saved query name");
                return Err(Error::invalid_payload("saved query name can't be empty"));
            }
            Some(name) => format!("{}{}", descriptor.path, urlencoding::encode(name)),
            None => descriptor.path.to_owned(),
        };
        let url = self.endpoint.url_for(&path, test)?;

        let (content_type, body) = match payload {
            Payload::Empty => (JSON_CONTENT_TYPE, None),
            Payload::Json(body) => (JSON_CONTENT_TYPE, Some(serde_json::to_string(body)?)),
            Payload::Sql(statement) => (SQL_CONTENT_TYPE, Some(statement.to_owned())),
        };
        let mut headers = HashMap::with_capacity(2);
        headers.insert("authorization".to_owned(), key.token().to_owned());
        headers.insert("content-type".to_owned(), content_type.to_owned());

        tracing::debug!(
            %operation,
            method = %descriptor.method,
            key_slot = %key.slot(),
            test,
            "dispatching request"
        );

        let response = self
            .transport
            .execute(HttpRequest {
                method: descriptor.method,
                url,
                headers,
                body,
                timeout: self.endpoint.timeout,
            })
            .await?;

        let checked = check_response(response)?;
        tracing::debug!(%operation, status = checked.status(), "request succeeded");
        Ok(checked)
    }
}
