//! Payload checks run before any request is sent.
//!
//! Each operation carries a [`PayloadRule`]. The rule borrows the payload,
//! never changes it, and either approves it or fails with
//! [`ErrorKind::InvalidPayload`](crate::ErrorKind::InvalidPayload) or
//! [`ErrorKind::QuotaExceeded`](crate::ErrorKind::QuotaExceeded).
//!
//! The individual checks are public so callers can validate a payload ahead
//! of time:
//!
//! ```rust
//! use serde_json::json;
//! use slicingdice::validate::validate_column;
//!
//! let column = json!({"name": "city", "type": "string", "cardinality": "high"});
//! assert!(validate_column(&column).is_ok());
//! ```

mod column;
mod count;
mod extraction;
mod guards;
mod top_values;

pub use column::{COLUMN_TYPES, MAX_DESCRIPTION_CHARS, MAX_NAME_CHARS, validate_column};
pub use count::{BYPASS_CACHE_KEY, MAX_COUNT_QUERIES, validate_count};
pub use extraction::{MAX_COLUMNS, MAX_LIMIT, validate_data_extraction};
pub use guards::{
    MAX_AGGREGATION_KEYS, MAX_EXISTS_IDS, SAVED_QUERY_TYPES, validate_aggregation,
    validate_exists, validate_saved_query,
};
pub use top_values::{MAX_CONTAINS, MAX_QUERIES, MAX_QUERY_KEYS, validate_top_values};

use serde_json::Value;

use crate::{Error, ErrorKind, Result};

/// The check an operation applies to its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadRule {
    /// No local check.
    None,
    /// Column definitions.
    Column,
    /// Count queries.
    Count,
    /// Score and result queries.
    DataExtraction,
    /// Top values queries.
    TopValues,
    /// Existence queries.
    ExistsEntity,
    /// Aggregation queries.
    Aggregation,
    /// Saved query creation.
    SavedQuery,
}

impl PayloadRule {
    /// Applies the rule to `payload`.
    ///
    /// A top values request with too many queries is reported by its
    /// validator rather than raised; here it becomes an invalid payload error.
    pub fn apply(self, payload: &Value) -> Result<()> {
        match self {
            PayloadRule::None => Ok(()),
            PayloadRule::Column => validate_column(payload),
            PayloadRule::Count => validate_count(payload),
            PayloadRule::DataExtraction => validate_data_extraction(payload),
            PayloadRule::TopValues => {
                if validate_top_values(payload)? {
                    Ok(())
                } else {
                    Err(Error::from_kind(ErrorKind::InvalidPayload))
                }
            }
            PayloadRule::ExistsEntity => validate_exists(payload),
            PayloadRule::Aggregation => validate_aggregation(payload),
            PayloadRule::SavedQuery => validate_saved_query(payload),
        }
    }
}
