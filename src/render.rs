//! Rejection-body rendering.
//!
//! Configured bodies usually come from a config file where every scalar is
//! written as a string. For `application/json`, strings that parse as a 64-bit
//! float are turned back into numbers before serialization, so `"404"` is sent
//! as `404`. `text/plain` renders the value as-is.
//!
//! ```rust
//! use authgate::render;
//! use serde_json::json;
//!
//! let body = json!({ "code": "404", "items": ["1.5", "x"] });
//! assert_eq!(
//!     render(&body, "application/json").unwrap(),
//!     r#"{"code":404,"items":[1.5,"x"]}"#,
//! );
//! assert_eq!(render(&json!(42), "text/plain").unwrap(), "42");
//! ```

use serde_json::{Map, Number, Value};

use crate::error::RenderError;

pub const APPLICATION_JSON: &str = "application/json";
pub const TEXT_PLAIN: &str = "text/plain";

// 2^53: the largest magnitude where every integer is exactly representable.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Serializes `value` for the given content type.
///
/// Content types are matched exactly; parameters such as `; charset=utf-8`
/// make the type unsupported.
pub fn render(value: &Value, content_type: &str) -> Result<String, RenderError> {
    match content_type {
        APPLICATION_JSON => {
            let coerced = coerce_numbers(value)?;
            serde_json::to_string(&coerced).map_err(|e| RenderError::Serialization(e.to_string()))
        }
        TEXT_PLAIN => Ok(plain(value)),
        other => Err(RenderError::UnsupportedContentType(other.to_owned())),
    }
}

/// Returns a copy of `value` with every numeric-looking string replaced by
/// its number. Keys and structure are preserved.
fn coerce_numbers(value: &Value) -> Result<Value, RenderError> {
    let coerced = match value {
        Value::String(s) => match s.parse::<f64>() {
            // Out-of-range literals such as "1e400" overflow to infinity; they
            // are not numbers and stay strings.
            Ok(n) if n.is_infinite() && !spells_infinity(s) => value.clone(),
            Ok(n) => Value::Number(to_number(n).ok_or_else(|| {
                RenderError::Serialization(format!("`{s}` has no JSON number representation"))
            })?),
            Err(_) => value.clone(),
        },
        Value::Array(items) => Value::Array(
            items.iter().map(coerce_numbers).collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| Ok((k.clone(), coerce_numbers(v)?)))
                .collect::<Result<Map<_, _>, RenderError>>()?,
        ),
        Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
    };
    Ok(coerced)
}

fn spells_infinity(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Integral values serialize without a fractional part (`404`, not `404.0`).
/// Negative zero keeps its sign (`-0.0`). `None` for NaN and the infinities.
fn to_number(n: f64) -> Option<Number> {
    let negative_zero = n == 0.0 && n.is_sign_negative();
    if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER && !negative_zero {
        return Some(Number::from(n as i64));
    }
    Number::from_f64(n)
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
