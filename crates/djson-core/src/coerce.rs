//! Coercion layer: converting values into the four canonical scalar types.
//!
//! Two tiers are provided.
//!
//! - **Lenient** (`to_*`): never fails. Every variant maps to something, with
//!   zero, `false` or `"null"` as the fallback.
//! - **Strict** (`*_strict`): returns `None` when the value has no meaningful
//!   conversion. Keyed getters use this tier so that the caller's default wins
//!   over a silent zero.
//!
//! | value    | to_int        | to_float     | to_bool              |
//! |----------|---------------|--------------|----------------------|
//! | Null     | 0             | 0.0          | false                |
//! | Bool     | 1 / 0         | 1.0 / 0.0    | itself               |
//! | Int      | itself        | widened      | `== 1`               |
//! | Float    | truncated     | itself       | false                |
//! | String   | base-10 or 0  | parsed or 0  | `eq_ignore_case("true")` |
//! | Object   | 0             | 0.0          | false                |
//! | Array    | 0             | 0.0          | false                |

use crate::value::Value;

/// Lenient integer conversion. Floats truncate toward zero (saturating at
/// the i64 bounds).
pub fn to_int(value: &Value) -> i64 {
    match value {
        Value::Null | Value::Object(_) | Value::Array(_) => 0,
        Value::Bool(b) => i64::from(*b),
        Value::Int(n) => *n,
        Value::Float(f) => *f as i64,
        Value::String(s) => parse_int(s).unwrap_or(0),
    }
}

/// Lenient float conversion.
pub fn to_float(value: &Value) -> f64 {
    match value {
        Value::Null | Value::Object(_) | Value::Array(_) => 0.0,
        Value::Bool(true) => 1.0,
        Value::Bool(false) => 0.0,
        Value::Int(n) => *n as f64,
        Value::Float(f) => *f,
        Value::String(s) => parse_float(s).unwrap_or(0.0),
    }
}

/// Lenient boolean conversion.
pub fn to_bool(value: &Value) -> bool {
    match value {
        Value::Null | Value::Float(_) | Value::Object(_) | Value::Array(_) => false,
        Value::Bool(b) => *b,
        Value::Int(n) => *n == 1,
        Value::String(s) => s.eq_ignore_ascii_case("true"),
    }
}

/// Canonical text form.
///
/// Strings are returned unquoted, `Null` renders as `"null"`, containers
/// render as compact JSON with object keys in sorted order.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Int(n) => n.to_string(),
        Value::Float(f) => format_float(*f),
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => value.to_json().to_string(),
    }
}

/// Strict integer conversion: ints, floats (truncated) and base-10 strings.
pub fn int_strict(value: &Value) -> Option<i64> {
    match value {
        Value::Int(n) => Some(*n),
        Value::Float(f) => Some(*f as i64),
        Value::String(s) => parse_int(s),
        _ => None,
    }
}

/// Strict float conversion: ints, floats and numeric strings.
pub fn float_strict(value: &Value) -> Option<f64> {
    match value {
        Value::Int(n) => Some(*n as f64),
        Value::Float(f) => Some(*f),
        Value::String(s) => parse_float(s),
        _ => None,
    }
}

/// Strict boolean conversion: bools, `"true"`/`"false"` in any case, and the
/// integers 0 and 1.
pub fn bool_strict(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Int(0) => Some(false),
        Value::Int(1) => Some(true),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

/// Whether a value may be stored in a container. Rejects NaN and ±Infinity.
pub fn is_storable(value: &Value) -> bool {
    match value {
        Value::Float(f) => f.is_finite(),
        _ => true,
    }
}

/// Shortest text that reads back as the same float; integral floats print
/// without a fractional part (`2.0` → `"2"`).
pub fn format_float(f: f64) -> String {
    format!("{f}")
}

/// Base-10 integer with an optional sign. No whitespace, no radix prefixes.
pub fn parse_int(text: &str) -> Option<i64> {
    text.parse::<i64>().ok()
}

/// Decimal or exponent notation. Text spelling NaN or infinity is rejected.
pub fn parse_float(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|f| f.is_finite())
}
