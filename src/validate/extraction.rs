//! Data extraction (score and result) checks.

use serde_json::Value;

use crate::{Error, Result};

/// Largest `limit` a data extraction query may ask for.
pub const MAX_LIMIT: i64 = 100;

/// Most columns a data extraction query may return.
pub const MAX_COLUMNS: usize = 10;

/// Validates the `limit` and `columns`/`fields` keys of a data extraction
/// query. Other keys are left to the service.
pub fn validate_data_extraction(payload: &Value) -> Result<()> {
    let query = payload
        .as_object()
        .ok_or_else(|| Error::invalid_payload("data extraction query must be an object"))?;

    for (key, value) in query {
        match key.as_str() {
            "limit" => validate_limit(value)?,
            "columns" | "fields" => validate_columns(key, value)?,
            _ => {}
        }
    }
    Ok(())
}

fn validate_limit(value: &Value) -> Result<()> {
    // Integers above i64::MAX only fit in u64.
    let over = match (value.as_i64(), value.as_u64()) {
        (Some(limit), _) => limit > MAX_LIMIT,
        (None, Some(_)) => true,
        (None, None) => {
            return Err(Error::invalid_payload("the key 'limit' in query has an invalid value"));
        }
    };
    if over {
        return Err(Error::quota_exceeded(format!(
            "the key 'limit' in data extraction must be at most {}",
            MAX_LIMIT
        )));
    }
    Ok(())
}

fn validate_columns(key: &str, value: &Value) -> Result<()> {
    match value {
        Value::Array(columns) if columns.len() > MAX_COLUMNS => Err(Error::quota_exceeded(format!(
            "the key '{}' in data extraction must have up to {} columns",
            key, MAX_COLUMNS
        ))),
        Value::Array(_) => Ok(()),
        Value::String(keyword) if keyword == "all" => Ok(()),
        _ => Err(Error::invalid_payload(format!(
            "the key '{}' should be a list of columns or the keyword 'all'",
            key
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use serde_json::json;
    use test_case::test_case;

    use super::*;
    use crate::ErrorKind;

    #[test_case(json!({"query": [{"age": {"gt": 1}}], "limit": 10}) ; "small limit")]
    #[test_case(json!({"limit": 100}) ; "limit at max")]
    #[test_case(json!({"limit": 0}) ; "zero limit")]
    #[test_case(json!({"limit": -1}) ; "negative limit")]
    #[test_case(json!({"columns": "all"}) ; "all columns")]
    #[test_case(json!({"fields": ["a", "b"]}) ; "fields list")]
    #[test_case(json!({"columns": ["c0", "c1", "c2", "c3", "c4", "c5", "c6", "c7", "c8", "c9"]}) ; "ten columns")]
    #[test_case(json!({"query": [], "page_token": "abc"}) ; "other keys ignored")]
    fn test_valid(payload: Value) {
        validate_data_extraction(&payload).unwrap();
    }

    #[test_case(json!({"limit": "10"}), ErrorKind::InvalidPayload ; "string limit")]
    #[test_case(json!({"limit": 10.5}), ErrorKind::InvalidPayload ; "fractional limit")]
    #[test_case(json!({"limit": 101}), ErrorKind::QuotaExceeded ; "limit over max")]
    #[test_case(json!({"limit": u64::MAX}), ErrorKind::QuotaExceeded ; "limit beyond i64")]
    #[test_case(json!({"columns": "some"}), ErrorKind::InvalidPayload ; "unknown keyword")]
    #[test_case(json!({"columns": 3}), ErrorKind::InvalidPayload ; "numeric columns")]
    #[test_case(json!({"fields": ["c0", "c1", "c2", "c3", "c4", "c5", "c6", "c7", "c8", "c9", "c10"]}), ErrorKind::QuotaExceeded ; "eleven fields")]
    #[test_case(json!(["limit"]), ErrorKind::InvalidPayload ; "array payload")]
    fn test_invalid(payload: Value, kind: ErrorKind) {
        let err = validate_data_extraction(&payload).unwrap_err();
        assert_eq!(err.kind(), kind);
    }
}
