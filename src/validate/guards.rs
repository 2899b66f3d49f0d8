//! Structural guards for existence, aggregation and saved query payloads.

use serde_json::Value;

use crate::{Error, Result};

/// Most ids one existence query may ask about.
pub const MAX_EXISTS_IDS: usize = 100;

/// Most top-level keys an aggregation request may have.
pub const MAX_AGGREGATION_KEYS: usize = 5;

/// Query types a saved query may wrap.
pub const SAVED_QUERY_TYPES: [&str; 5] = [
    "count/entity",
    "count/event",
    "count/entity/total",
    "aggregation",
    "top_values",
];

/// Requires an `ids` list of at most [`MAX_EXISTS_IDS`] entries.
pub fn validate_exists(payload: &Value) -> Result<()> {
    let ids = payload
        .get("ids")
        .ok_or_else(|| Error::invalid_payload("existence query needs an 'ids' list"))?
        .as_array()
        .ok_or_else(|| Error::invalid_payload("'ids' must be a list"))?;
    if ids.len() > MAX_EXISTS_IDS {
        return Err(Error::quota_exceeded(format!(
            "existence queries are limited to {} ids, got {}",
            MAX_EXISTS_IDS,
            ids.len()
        )));
    }
    Ok(())
}

/// Requires a `query` key and at most [`MAX_AGGREGATION_KEYS`] top-level keys.
pub fn validate_aggregation(payload: &Value) -> Result<()> {
    let request = payload
        .as_object()
        .ok_or_else(|| Error::invalid_payload("aggregation request must be an object"))?;
    if !request.contains_key("query") {
        return Err(Error::invalid_payload("the aggregation query must have the key 'query'"));
    }
    if request.len() > MAX_AGGREGATION_KEYS {
        return Err(Error::quota_exceeded(format!(
            "aggregation requests are limited to {} keys",
            MAX_AGGREGATION_KEYS
        )));
    }
    Ok(())
}

/// Requires `name`, `type` and `query`, with a known `type`.
pub fn validate_saved_query(payload: &Value) -> Result<()> {
    let request = payload
        .as_object()
        .ok_or_else(|| Error::invalid_payload("saved query must be an object"))?;
    for key in ["name", "type", "query"] {
        if !request.contains_key(key) {
            return Err(Error::invalid_payload(format!("saved query needs the key '{}'", key)));
        }
    }
    match request.get("type").and_then(Value::as_str) {
        Some(kind) if SAVED_QUERY_TYPES.contains(&kind) => Ok(()),
        _ => Err(Error::invalid_payload(format!(
            "saved query type must be one of {}",
            SAVED_QUERY_TYPES.join(", ")
        ))),
    }
}
