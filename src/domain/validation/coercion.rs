//! Raw JSON value coercion shared by the model validators

use super::types::{ErrorKind, FieldError, ValidationErrors};
use regex::Regex;
use serde_json::{Map, Value};

/// Require the raw input of a model to be a JSON object
pub fn object(raw: &Value) -> Result<&Map<String, Value>, FieldError> {
    raw.as_object().ok_or_else(|| {
        FieldError::new(ErrorKind::TypeMismatch, raw.clone()).with_ctx("expected", "object")
    })
}

/// Value of a required field; absence is reported with the whole object as input
pub fn required<'a>(obj: &'a Map<String, Value>, name: &str) -> Result<&'a Value, FieldError> {
    obj.get(name)
        .ok_or_else(|| FieldError::new(ErrorKind::Missing, Value::Object(obj.clone())))
}

/// Value of an optional field; absence and `null` both mean unset
pub fn optional<'a>(obj: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    obj.get(name).filter(|value| !value.is_null())
}

pub fn string(raw: &Value) -> Result<&str, FieldError> {
    raw.as_str().ok_or_else(|| {
        FieldError::new(ErrorKind::TypeMismatch, raw.clone()).with_ctx("expected", "string")
    })
}

pub fn list(raw: &Value) -> Result<&Vec<Value>, FieldError> {
    raw.as_array().ok_or_else(|| {
        FieldError::new(ErrorKind::TypeMismatch, raw.clone()).with_ctx("expected", "list")
    })
}

/// Lax integer parsing: JSON integers, integral floats and decimal strings
pub fn integer(raw: &Value) -> Result<i64, FieldError> {
    let parsed = match raw {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| {
        FieldError::new(ErrorKind::TypeMismatch, raw.clone()).with_ctx("expected", "integer")
    })
}

/// `value > gt`
pub fn check_greater_than(value: i64, gt: i64) -> Result<i64, FieldError> {
    if value > gt {
        Ok(value)
    } else {
        Err(FieldError::new(ErrorKind::GreaterThan, Value::from(value)).with_ctx("gt", gt))
    }
}

/// Length in characters, not bytes
pub fn check_min_length(value: &str, min_length: usize) -> Result<(), FieldError> {
    if value.chars().count() < min_length {
        return Err(FieldError::new(ErrorKind::TooShort, Value::from(value))
            .with_ctx("min_length", min_length));
    }
    Ok(())
}

pub fn check_max_length(value: &str, max_length: usize) -> Result<(), FieldError> {
    if value.chars().count() > max_length {
        return Err(FieldError::new(ErrorKind::TooLong, Value::from(value))
            .with_ctx("max_length", max_length));
    }
    Ok(())
}

pub fn check_pattern(value: &str, regex: &Regex) -> Result<(), FieldError> {
    if !regex.is_match(value) {
        return Err(FieldError::new(ErrorKind::PatternMismatch, Value::from(value))
            .with_ctx("pattern", regex.as_str()));
    }
    Ok(())
}

/// Coerce every element of a list, collecting element errors under their index
pub fn each<T>(
    items: &[Value],
    mut coerce: impl FnMut(&Value) -> Result<T, ValidationErrors>,
) -> Result<Vec<T>, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let mut values = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        match coerce(item) {
            Ok(value) => values.push(value),
            Err(element_errors) => {
                for error in element_errors.at(index) {
                    errors.push(error);
                }
            }
        }
    }

    errors.finish(Some(values))
}
