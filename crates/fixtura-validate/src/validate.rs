use fixtura_core::{Schema, validate_schema};
use serde_json::Value;

use crate::errors::{Result, ValidationError, ValidationResult};

/// Validate a value against a schema.
///
/// A malformed schema is a fail-fast error; malformed values never error
/// and only ever produce entries in the result's error list.
pub fn validate(schema: &Schema, value: &Value) -> Result<ValidationResult> {
    validate_schema(schema)?;
    Ok(check(schema, value))
}

/// Walk an already well-formed schema against a value.
pub(crate) fn check(schema: &Schema, value: &Value) -> ValidationResult {
    let mut errors = Vec::new();
    check_value(schema, value, "", &mut errors);
    ValidationResult::from_errors(errors)
}

fn check_value(schema: &Schema, value: &Value, path: &str, errors: &mut Vec<ValidationError>) {
    if !type_matches(schema, value) {
        errors.push(ValidationError::new(
            path,
            format!(
                "Expected type {} but got {}",
                schema.type_name(),
                value_type_name(value)
            ),
        ));
        return;
    }

    match schema {
        Schema::String(string) => {
            let Some(text) = value.as_str() else {
                return;
            };
            if let Some(allowed) = &string.allowed
                && !allowed.iter().any(|candidate| candidate == text)
            {
                errors.push(ValidationError::new(
                    path,
                    format!(
                        "Invalid enum value: '{text}' should be one of: {}",
                        allowed.join(", ")
                    ),
                ));
            }
            if let Some(format) = string.format
                && !format.matches(text)
            {
                errors.push(ValidationError::new(path, format!("Invalid format: {format}")));
            }
        }
        Schema::Number(number) => {
            if let (Some(allowed), Some(actual)) = (&number.allowed, value.as_f64())
                && !allowed.iter().any(|candidate| *candidate == actual)
            {
                errors.push(ValidationError::new(
                    path,
                    format!("Invalid enum value: '{actual}' should be one of: {}", join(allowed)),
                ));
            }
        }
        Schema::Integer(integer) => {
            if let (Some(allowed), Some(actual)) = (&integer.allowed, integer_value(value))
                && !allowed.contains(&actual)
            {
                errors.push(ValidationError::new(
                    path,
                    format!("Invalid enum value: '{actual}' should be one of: {}", join(allowed)),
                ));
            }
        }
        Schema::Object(object) => {
            let Some(map) = value.as_object() else {
                return;
            };
            for name in &object.required {
                if !map.contains_key(name) {
                    errors.push(ValidationError::new(
                        child_path(path, name),
                        format!("Missing required property: {name}"),
                    ));
                }
            }
            for (name, property) in &object.properties {
                if let Some(nested) = map.get(name) {
                    check_value(property, nested, &child_path(path, name), errors);
                }
            }
        }
        Schema::Array(array) => {
            let Some(items) = &array.items else {
                return;
            };
            let Some(elements) = value.as_array() else {
                return;
            };
            for (index, element) in elements.iter().enumerate() {
                check_value(items, element, &format!("{path}[{index}]"), errors);
            }
        }
        Schema::Boolean | Schema::Null => {}
    }
}

fn type_matches(schema: &Schema, value: &Value) -> bool {
    match schema {
        Schema::String(_) => value.is_string(),
        Schema::Number(_) => value.is_number(),
        Schema::Integer(_) => integer_value(value).is_some(),
        Schema::Boolean => value.is_boolean(),
        Schema::Object(_) => value.is_object(),
        Schema::Array(_) => value.is_array(),
        Schema::Null => value.is_null(),
    }
}

/// Integral view of a JSON number: direct integers, plus floats with no
/// fractional part.
fn integer_value(value: &Value) -> Option<i64> {
    if let Some(int) = value.as_i64() {
        return Some(int);
    }
    value
        .as_f64()
        .filter(|float| float.is_finite() && float.fract() == 0.0)
        .map(|float| float as i64)
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
