//! Count query checks.

use serde_json::Value;

use crate::{Error, Result};

/// Most count queries one request may carry.
pub const MAX_COUNT_QUERIES: usize = 10;

/// Key that toggles the service cache; it is not a query.
pub const BYPASS_CACHE_KEY: &str = "bypass-cache";

/// Validates the number of queries in a count request.
///
/// Objects count their top-level keys except `bypass-cache`; arrays count
/// their elements.
pub fn validate_count(payload: &Value) -> Result<()> {
    let queries = match payload {
        Value::Object(map) => map.keys().filter(|key| *key != BYPASS_CACHE_KEY).count(),
        Value::Array(items) => items.len(),
        _ => return Err(Error::invalid_payload("count query must be an object or an array")),
    };

    if queries > MAX_COUNT_QUERIES {
        return Err(Error::quota_exceeded(format!(
            "count queries are limited to {} per request, got {}",
            MAX_COUNT_QUERIES, queries
        )));
    }
    Ok(())
}
