//! Handle the rendering of literal values.

use serde_json::Value;

/// Render a JSON value as predicate text.
///
/// Strings are written verbatim, without quotes. Everything else is written as
/// compact JSON.
pub fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
