//! Loose-input coercion for clause records
//!
//! Extraction output is not trusted to be well typed: a page may arrive as a
//! number, a title as `null`, a path as a single string. Everything is folded
//! into optional text here so the checks downstream only ever see strings.

use serde_json::Value;

/// Coerce any JSON value to text. `null` is treated as absent.
pub fn text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        // Nested structures keep their compact JSON form
        other => Some(other.to_string()),
    }
}

/// Coerce a JSON value to a clause path.
///
/// Arrays are coerced element-wise (`null` elements become `""`), any other
/// non-null value becomes a one-segment path.
pub fn path(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items
            .iter()
            .map(|item| text(item).unwrap_or_default())
            .collect(),
        other => text(other).into_iter().collect(),
    }
}
