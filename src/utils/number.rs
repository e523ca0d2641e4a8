//! Best-effort numeric coercion for stored package counts and overtime hours.
//! Anything that cannot be read as a number becomes zero.

use serde_json::Value;

/// Coerce a stored value to a floating point number.
///
/// Numeric strings are accepted with either `.` or `,` as decimal separator.
/// Booleans map to 0/1, everything else (null, garbage, containers) to 0.
pub fn coerce_f64(value: &Value) -> f64 {
    let v = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().replace(',', ".").parse::<f64>().unwrap_or(0.0),
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    };

    if v.is_finite() { v } else { 0.0 }
}

/// Non-negative variant of [`coerce_f64`] (negatives clamp to 0).
pub fn coerce_non_negative_f64(value: &Value) -> f64 {
    coerce_f64(value).max(0.0)
}

/// Coerce a stored package count. Fractions are rounded, negatives clamp to 0.
pub fn coerce_u32(value: &Value) -> u32 {
    let v = coerce_f64(value).round();
    if v <= 0.0 {
        0
    } else if v >= u32::MAX as f64 {
        u32::MAX
    } else {
        v as u32
    }
}

/// Parse a user-entered decimal (CLI input), accepting `,` as decimal separator.
pub fn parse_decimal(s: &str) -> Option<f64> {
    s.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
