//! Column definition checks.

use serde_json::{Map, Value};

use crate::{Error, Result};

/// Longest accepted column name, in characters.
pub const MAX_NAME_CHARS: usize = 80;

/// Longest accepted column description, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 300;

/// Column types the service accepts.
pub const COLUMN_TYPES: [&str; 11] = [
    "unique-id",
    "boolean",
    "string",
    "integer",
    "decimal",
    "enumerated",
    "date",
    "integer-time-series",
    "decimal-time-series",
    "string-time-series",
    "datetime",
];

const CARDINALITIES: [&str; 2] = ["high", "low"];

const DECIMAL_TYPES: [&str; 2] = ["decimal", "decimal-time-series"];

/// Validates a column definition or an array of definitions.
///
/// Arrays are checked element by element and the first bad element fails the
/// whole payload.
pub fn validate_column(payload: &Value) -> Result<()> {
    match payload {
        Value::Object(column) => validate_definition(column),
        Value::Array(columns) => columns.iter().try_for_each(|column| match column {
            Value::Object(column) => validate_definition(column),
            _ => Err(Error::invalid_payload("each column definition must be an object")),
        }),
        _ => Err(Error::invalid_payload(
            "column payload must be an object or an array of objects",
        )),
    }
}

fn validate_definition(column: &Map<String, Value>) -> Result<()> {
    let name = required_str(column, "name", "the column should have a name")?;
    if name.trim().is_empty() {
        return Err(Error::invalid_payload("the column's name can't be empty"));
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(Error::invalid_payload(format!(
            "the column's name is too long (max: {} chars)",
            MAX_NAME_CHARS
        )));
    }

    let column_type = required_str(column, "type", "the column should have a type")?;
    if !COLUMN_TYPES.contains(&column_type) {
        return Err(Error::invalid_payload(format!(
            "'{}' is not a valid column type",
            column_type
        )));
    }

    match column_type {
        "string" => {
            let cardinality = required_str(
                column,
                "cardinality",
                "a column of type string should have a 'cardinality' key",
            )?;
            if !CARDINALITIES.contains(&cardinality) {
                return Err(Error::invalid_payload("the column 'cardinality' has an invalid value"));
            }
        }
        "enumerated" if !column.contains_key("range") => {
            return Err(Error::invalid_payload(
                "the 'enumerated' type needs the 'range' parameter",
            ));
        }
        _ => {}
    }

    if let Some(description) = column.get("description") {
        let description = description
            .as_str()
            .ok_or_else(|| Error::invalid_payload("the column's description must be a string"))?;
        if description.trim().is_empty() {
            return Err(Error::invalid_payload("the column's description can't be empty"));
        }
        if description.chars().count() > MAX_DESCRIPTION_CHARS {
            return Err(Error::invalid_payload(format!(
                "the column's description is too long (max: {} chars)",
                MAX_DESCRIPTION_CHARS
            )));
        }
    }

    if column.contains_key("decimal-place") && !DECIMAL_TYPES.contains(&column_type) {
        return Err(Error::invalid_payload(
            "'decimal-place' is only valid for decimal columns",
        ));
    }

    Ok(())
}

fn required_str<'a>(
    column: &'a Map<String, Value>,
    key: &str,
    missing: &'static str,
) -> Result<&'a str> {
    match column.get(key) {
        None => Err(Error::invalid_payload(missing)),
        Some(value) => value
            .as_str()
            .ok_or_else(|| Error::invalid_payload(format!("the column's '{}' must be a string", key))),
    }
}
