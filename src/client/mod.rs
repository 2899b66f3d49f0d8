//! The SlicingDice client and its operations.
//!
//! Every operation follows the same pipeline:
//!
//! 1. the configured key is checked against the operation's privilege level
//! 2. the payload is checked against the operation's local rules
//! 3. the request is sent through the transport
//! 4. the response is decoded into the body or a typed [`Error`](crate::Error)
//!
//! Steps 1 and 2 fail without touching the network.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use serde_json::json;
//! use slicingdice::prelude::*;
//!
//! let client = Client::builder()
//!     .credentials(Credentials::new().with_master_key("your-master-key"))
//!     .build()?;
//!
//! let counts = client
//!     .count_entity(&json!({"users-from-ny": {"query": [{"state": {"equals": "NY"}}]}}))
//!     .await?;
//! ```

mod builder;
mod inner;

pub use builder::{ClientBuilder, HasCredentials, NoCredentials};

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};

use crate::Result;
use crate::operation::Operation;
use inner::{ClientInner, Payload};

/// The SlicingDice SDK client.
///
/// Create one with [`Client::builder()`]. All operations are async and
/// return the decoded JSON body.
///
/// ## Thread Safety
///
/// `Client` is `Clone`, `Send` and `Sync`. Clones share the same keys,
/// configuration and transport.
///
/// ## Test Endpoint
///
/// [`test_endpoint()`](Client::test_endpoint) returns a client whose calls
/// go to `<base>/test/...`. It is a cheap clone; the original is unchanged.
///
/// ```rust,ignore
/// let sandbox = client.test_endpoint();
/// sandbox.insert(&data).await?; // POST <base>/test/insert/
/// client.insert(&data).await?;  // POST <base>/insert/
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
    test: bool,
}

impl Client {
    /// Creates a new client builder.
    pub fn builder() -> ClientBuilder<NoCredentials> {
        ClientBuilder::new()
    }

    /// Returns a client that sends every call to the test endpoint.
    #[must_use]
    pub fn test_endpoint(&self) -> Client {
        Client { inner: Arc::clone(&self.inner), test: true }
    }

    /// Returns a client that sends every call to the production endpoint.
    #[must_use]
    pub fn production_endpoint(&self) -> Client {
        Client { inner: Arc::clone(&self.inner), test: false }
    }

    /// Returns `true` if calls go to the test endpoint.
    #[inline]
    pub fn uses_test_endpoint(&self) -> bool {
        self.test
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.inner.endpoint.base_url
    }

    /// Returns the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.inner.endpoint.timeout
    }

    pub(crate) fn from_inner(inner: ClientInner, test: bool) -> Self {
        Self { inner: Arc::new(inner), test }
    }

    async fn call(&self, operation: Operation, payload: Payload<'_>) -> Result<Value> {
        self.inner
            .dispatch(operation, payload, None, self.test)
            .await
            .map(|response| response.into_data())
    }

    async fn call_named(
        &self,
        operation: Operation,
        name: &str,
        payload: Payload<'_>,
    ) -> Result<Value> {
        self.inner
            .dispatch(operation, payload, Some(name), self.test)
            .await
            .map(|response| response.into_data())
    }

    // ========================================================================
    // Schema
    // ========================================================================

    /// Creates a column, or several when `columns` is an array.
    ///
    /// Requires a master or custom key. Every definition is checked locally
    /// and one bad definition rejects the whole request.
    pub async fn create_column(&self, columns: &Value) -> Result<Value> {
        self.call(Operation::CreateColumn, Payload::Json(columns)).await
    }

    /// Lists the database's columns. Requires a master or custom key.
    pub async fn columns(&self) -> Result<Value> {
        self.call(Operation::Columns, Payload::Empty).await
    }

    /// Describes the database. Requires a master or custom key.
    pub async fn database(&self) -> Result<Value> {
        self.call(Operation::Database, Payload::Empty).await
    }

    // ========================================================================
    // Data
    // ========================================================================

    /// Inserts data. Requires a write, master or custom key.
    pub async fn insert(&self, data: &Value) -> Result<Value> {
        self.call(Operation::Insert, Payload::Json(data)).await
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Counts entities matching each query (at most 10 per request).
    pub async fn count_entity(&self, query: &Value) -> Result<Value> {
        self.call(Operation::CountEntity, Payload::Json(query)).await
    }

    /// Counts every entity in the database.
    pub async fn count_entity_total(&self) -> Result<Value> {
        self.call(Operation::CountEntityTotal, Payload::Json(&json!({}))).await
    }

    /// Counts every entity in the given tables.
    pub async fn count_entity_total_for<I, S>(&self, tables: I) -> Result<Value>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tables: Vec<String> = tables.into_iter().map(Into::into).collect();
        let body = json!({ "tables": tables });
        self.call(Operation::CountEntityTotal, Payload::Json(&body)).await
    }

    /// Counts events matching each query (at most 10 per request).
    pub async fn count_event(&self, query: &Value) -> Result<Value> {
        self.call(Operation::CountEvent, Payload::Json(query)).await
    }

    /// Runs an aggregation. The request must have a `query` key.
    pub async fn aggregation(&self, query: &Value) -> Result<Value> {
        self.call(Operation::Aggregation, Payload::Json(query)).await
    }

    /// Returns the most frequent values of columns.
    ///
    /// At most 5 queries, 6 keys per query and 5 `contains` values.
    pub async fn top_values(&self, query: &Value) -> Result<Value> {
        self.call(Operation::TopValues, Payload::Json(query)).await
    }

    /// Checks which of `ids` exist, optionally within one table.
    ///
    /// At most 100 ids per request. Ids keep their JSON type, so numeric ids
    /// are sent as numbers.
    pub async fn exists_entity<I, V>(&self, ids: I, table: Option<&str>) -> Result<Value>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let ids: Vec<Value> = ids.into_iter().map(Into::into).collect();
        let mut body = json!({ "ids": ids });
        if let Some(table) = table {
            body["table"] = Value::from(table);
        }
        self.call(Operation::ExistsEntity, Payload::Json(&body)).await
    }

    // ========================================================================
    // Saved queries
    // ========================================================================

    /// Runs the saved query `name`.
    pub async fn saved_query(&self, name: &str) -> Result<Value> {
        self.call_named(Operation::SavedQuery, name, Payload::Empty).await
    }

    /// Lists saved queries. Requires a master or custom key.
    pub async fn saved_queries(&self) -> Result<Value> {
        self.call(Operation::SavedQueries, Payload::Empty).await
    }

    /// Creates a saved query from `name`, `type` and `query` keys.
    pub async fn create_saved_query(&self, query: &Value) -> Result<Value> {
        self.call(Operation::CreateSavedQuery, Payload::Json(query)).await
    }

    /// Replaces the saved query `name`. Requires a master or custom key.
    pub async fn update_saved_query(&self, name: &str, query: &Value) -> Result<Value> {
        self.call_named(Operation::UpdateSavedQuery, name, Payload::Json(query)).await
    }

    /// Deletes the saved query `name`. Requires a master or custom key.
    pub async fn delete_saved_query(&self, name: &str) -> Result<Value> {
        self.call_named(Operation::DeleteSavedQuery, name, Payload::Empty).await
    }

    // ========================================================================
    // Data extraction
    // ========================================================================

    /// Extracts entity scores. `limit` is at most 100 and `columns` at most 10.
    pub async fn score(&self, query: &Value) -> Result<Value> {
        self.call(Operation::Score, Payload::Json(query)).await
    }

    /// Extracts entity values. `limit` is at most 100 and `columns` at most 10.
    pub async fn result(&self, query: &Value) -> Result<Value> {
        self.call(Operation::Result, Payload::Json(query)).await
    }

    /// Runs a SQL statement. The text is sent as is.
    pub async fn sql(&self, statement: &str) -> Result<Value> {
        self.call(Operation::Sql, Payload::Sql(statement)).await
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.endpoint.base_url)
            .field("test", &self.test)
            .field("credentials", &self.inner.credentials)
            .finish_non_exhaustive()
    }
}
