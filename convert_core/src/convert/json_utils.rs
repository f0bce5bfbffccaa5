// JSON parsing and the binary number/string classification shared by the schema generators.
use serde_json::{Map, Value};

use crate::error::ConvertError;

/// Parses a JSON string into `serde_json::Value`, surfacing failures as `ConvertError::Parse`.
///
/// # Example
/// ```
/// use convert_core::convert::json_utils::parse_json;
/// let value = parse_json("{\"id\":1}")?;
/// assert_eq!(value["id"], 1);
/// # Ok::<(), convert_core::ConvertError>(())
/// ```
pub fn parse_json(input: &str) -> Result<Value, ConvertError> {
    Ok(serde_json::from_str(input)?)
}

/// Parses a JSON document whose root must be an object; key order follows the input.
pub fn parse_object(input: &str) -> Result<Map<String, Value>, ConvertError> {
    match parse_json(input)? {
        Value::Object(map) => Ok(map),
        other => Err(ConvertError::parse(format!(
            "expected a JSON object at the top level, found {}",
            kind_name(&other)
        ))),
    }
}

/// Field type under the two-state inference: numbers stay numbers, everything else is text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Number,
    String,
}

impl FieldKind {
    pub fn of(value: &Value) -> Self {
        if value.is_number() {
            Self::Number
        } else {
            Self::String
        }
    }
}

/// Returns `(key, kind)` pairs for every top-level field, preserving input order.
pub fn classify_fields(map: &Map<String, Value>) -> Vec<(&str, FieldKind)> {
    map.iter()
        .map(|(key, value)| (key.as_str(), FieldKind::of(value)))
        .collect()
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
