use serde_json::Value;

use crate::errors::GenerationError;

/// Validate a dynamically-typed `length` argument.
///
/// Accepts integer-valued numbers only: `5` and `5.0` pass, `5.5`, `"5"`,
/// null, and an absent value do not. Runs before any set construction so a
/// bad length never does work.
pub fn validate_length(raw: Option<&Value>) -> Result<usize, GenerationError> {
    let Some(value) = raw.filter(|value| !value.is_null()) else {
        return Err(GenerationError::LengthType("nothing".to_string()));
    };
    let Value::Number(number) = value else {
        return Err(GenerationError::LengthType(kind_name(value).to_string()));
    };
    let length = if let Some(signed) = number.as_i64() {
        signed
    } else if let Some(float) = number.as_f64().filter(|float| float.fract() == 0.0) {
        float as i64
    } else {
        return Err(GenerationError::LengthType(format!("the number {number}")));
    };
    check_length(length)
}

/// Validate an already-typed `length` argument.
pub fn check_length(length: i64) -> Result<usize, GenerationError> {
    if length < 0 {
        return Err(GenerationError::LengthRange(length));
    }
    Ok(length as usize)
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
