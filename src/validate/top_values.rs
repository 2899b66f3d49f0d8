//! Top values query checks.

use serde_json::{Map, Value};

use super::count::BYPASS_CACHE_KEY;
use crate::{Error, Result};

/// Most top values queries one request may carry.
pub const MAX_QUERIES: usize = 5;

/// Most keys a single top values query may have.
pub const MAX_QUERY_KEYS: usize = 6;

/// Most entries a `contains` list may have.
pub const MAX_CONTAINS: usize = 5;

/// Validates a top values request.
///
/// Every top-level key counts toward [`MAX_QUERIES`], `bypass-cache`
/// included. The flag itself is not shape-checked as a query. Too many queries is reported as `Ok(false)`. Too many keys in one query or
/// too many `contains` entries is raised as a quota error. Every query is
/// checked for key count before any `contains` list is looked at.
pub fn validate_top_values(payload: &Value) -> Result<bool> {
    let queries = payload
        .as_object()
        .ok_or_else(|| Error::invalid_payload("top values query must be an object"))?;

    if queries.len() > MAX_QUERIES {
        return Ok(false);
    }

    let subqueries = subqueries(queries)?;

    if let Some((name, _)) = subqueries.iter().find(|(_, query)| query.len() > MAX_QUERY_KEYS) {
        return Err(Error::quota_exceeded(format!(
            "query '{}' exceeds the limit of {} fields per query",
            name, MAX_QUERY_KEYS
        )));
    }

    for (name, query) in &subqueries {
        let too_many = match query.get("contains") {
            Some(Value::Array(values)) => values.len() > MAX_CONTAINS,
            Some(_) => {
                return Err(Error::invalid_payload(format!(
                    "'contains' in query '{}' must be a list",
                    name
                )));
            }
            None => false,
        };
        if too_many {
            return Err(Error::quota_exceeded(format!(
                "query '{}' exceeds the limit of {} contains values",
                name, MAX_CONTAINS
            )));
        }
    }

    Ok(true)
}

fn subqueries(queries: &Map<String, Value>) -> Result<Vec<(&str, &Map<String, Value>)>> {
    queries
        .iter()
        .filter(|(key, _)| *key != BYPASS_CACHE_KEY)
        .map(|(name, query)| match query {
            Value::Object(query) => Ok((name.as_str(), query)),
            _ => Err(Error::invalid_payload(format!(
                "top values query '{}' must be an object",
                name
            ))),
        })
        .collect()
}
