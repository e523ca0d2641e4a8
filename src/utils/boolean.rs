//! Boolean normalization used at every ingestion boundary (SQLite rows, JSON import).
//!
//! Stored flags may come back as `true/false`, `1/0` or the strings
//! `"true"`/`"false"`/`"1"`/`"0"`. Everything goes through [`parse_boolean`].

use serde_json::Value;

/// Total mapping from an untyped stored value to a strict boolean.
///
/// - booleans pass through
/// - numbers: anything different from zero is `true`
/// - strings (trimmed, case-insensitive): `"true"`/`"1"` → `true`,
///   `"false"`/`"0"` → `false`, empty → `false`, anything else → `true`
/// - `null` → `false`
/// - arrays and objects → `true`
pub fn parse_boolean(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => parse_boolean_str(s),
        Value::Null => false,
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// String half of [`parse_boolean`].
pub fn parse_boolean_str(s: &str) -> bool {
    match s.trim().to_lowercase().as_str() {
        "true" | "1" => true,
        "false" | "0" | "" => false,
        _ => true,
    }
}
