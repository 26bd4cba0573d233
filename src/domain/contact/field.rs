//! src/domain/contact/field.rs
use serde_json::Value;

/// Whether a submitted value counts as "filled in".
///
/// `null`, `false`, `0` and the empty string do not.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Length in UTF-16 code units once surrounding whitespace is removed.
///
/// This is the length a browser reports for the same text, so an emoji counts
/// as 2 and a Devanagari conjunct as several.
pub fn trimmed_len(s: &str) -> usize {
    s.trim().encode_utf16().count()
}
