/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/
use serde_json::{Number, Value};

/// Converts form input to a JSON number the way a browser `Number()` call does
///
/// Blank input becomes `0`. Input that is not a finite number becomes
/// `null`, which the backend then rejects as a field error. Integral values
/// are emitted as integers.
#[must_use]
pub fn coerce_number(input: &str) -> Value {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Value::from(0);
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => {
            if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
                Value::from(n as i64)
            } else {
                Number::from_f64(n).map_or(Value::Null, Value::Number)
            }
        }
        _ => Value::Null,
    }
}
