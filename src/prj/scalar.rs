//! Scalar token coercion.

use super::value::Value;

/// Coerce a raw token into a typed scalar.
///
/// Ordered attempts, first success wins: missing token, boolean literal,
/// base-10 integer, float, quoted string, raw string. The raw-string arm
/// never fails, so this is total over all inputs.
pub fn coerce(token: Option<&str>) -> Value {
    let token = match token {
        Some(token) => token,
        None => return Value::Null,
    };
    match token {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(int) = token.parse::<i64>() {
        return Value::Int(int);
    }
    if let Ok(float) = token.parse::<f64>() {
        return Value::Float(float);
    }
    if let Some(inner) = unquote(token) {
        return Value::String(inner.to_string());
    }
    Value::String(token.to_string())
}

/// Strip a single wrapping apostrophe pair.
///
/// Applies only to tokens of the exact form `'...'` with no interior
/// apostrophes; everything else stays as-is.
fn unquote(token: &str) -> Option<&str> {
    let inner = token.strip_prefix('\'')?.strip_suffix('\'')?;
    if inner.contains('\'') {
        return None;
    }
    Some(inner)
}
