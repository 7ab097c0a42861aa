//! Name/value pair validation for `Report::add_pair`
//!
//! A pair is anything that serializes to a two-element JSON array whose
//! first element is a string: `("name", value)`, `["name", value]`,
//! `vec![json!("name"), value]`.

use reporter_core::{JsonValue, ReporterError, Result};

/// JSON type name used in pair diagnostics
pub(crate) fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// Split a serialized pair into its name and value.
///
/// # Errors
///
/// Returns a validation error naming the failed check: not an array,
/// length other than 2, or a first element that is not a string.
pub fn split_pair(pair: JsonValue) -> Result<(String, JsonValue)> {
    let items = match pair {
        JsonValue::Array(items) => items,
        other => {
            return Err(ReporterError::invalid_pair(format!(
                "Invalid type {}, must be list or tuple.",
                json_type_name(&other)
            )))
        }
    };

    if items.len() != 2 {
        return Err(ReporterError::invalid_pair(
            "Invalid list or tuple, length must be 2.",
        ));
    }

    let mut items = items.into_iter();
    match (items.next(), items.next()) {
        (Some(JsonValue::String(name)), Some(value)) => Ok((name, value)),
        (Some(first), _) => Err(ReporterError::invalid_pair(format!(
            "First element of list or tuple must be str, not {}",
            json_type_name(&first)
        ))),
        _ => Err(ReporterError::invalid_pair(
            "Invalid list or tuple, length must be 2.",
        )),
    }
}
