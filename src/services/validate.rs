//! Shared coercion helpers for loosely-shaped JSON item lists.
//!
//! Item lists arrive as raw `serde_json::Value`s and pass through one
//! explicit parse-and-validate step per engine. These helpers implement the
//! scalar coercions common to all of them.

use serde_json::Value;

/// Stringify a scalar JSON value. Null and composite values yield `None`.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Coerce a JSON value to an integer: integers pass through, floats
/// truncate, numeric strings parse. Anything else yields `None`.
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// JSON truthiness: false, 0, empty string, null and empty containers are
/// false; everything else is true.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// The subset of `keys` absent from `entry`, preserving `keys` order.
pub fn missing_keys<'a>(entry: &serde_json::Map<String, Value>, keys: &[&'a str]) -> Vec<&'a str> {
    keys.iter()
        .copied()
        .filter(|k| !entry.contains_key(*k))
        .collect()
}
