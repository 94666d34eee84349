use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::schema::Schema;

/// Validate internal consistency of a schema.
///
/// This checks:
/// - every `required` name is declared in `properties`, with no repeats
/// - `enum` lists are non-empty
/// - numeric enum members are finite
/// - string enum members satisfy the declared `format`
///
/// Both the validator and the generator fail fast on a malformed schema
/// rather than silently skipping the offending rule.
pub fn validate_schema(schema: &Schema) -> Result<()> {
    match schema {
        Schema::String(string) => {
            if let Some(allowed) = &string.allowed {
                if allowed.is_empty() {
                    return Err(Error::InvalidSchema(
                        "enum must list at least one value".to_string(),
                    ));
                }
                if let Some(format) = string.format {
                    for value in allowed {
                        if !format.matches(value) {
                            return Err(Error::InvalidSchema(format!(
                                "enum value '{value}' does not satisfy format '{format}'"
                            )));
                        }
                    }
                }
            }
            Ok(())
        }
        Schema::Number(number) => {
            if let Some(allowed) = &number.allowed {
                if allowed.is_empty() {
                    return Err(Error::InvalidSchema(
                        "enum must list at least one value".to_string(),
                    ));
                }
                for value in allowed {
                    if !value.is_finite() {
                        return Err(Error::InvalidSchema(format!(
                            "enum value '{value}' is not a finite number"
                        )));
                    }
                }
            }
            Ok(())
        }
        Schema::Integer(integer) => {
            if let Some(allowed) = &integer.allowed
                && allowed.is_empty()
            {
                return Err(Error::InvalidSchema(
                    "enum must list at least one value".to_string(),
                ));
            }
            Ok(())
        }
        Schema::Object(object) => {
            let mut seen = BTreeSet::new();
            for name in &object.required {
                if !seen.insert(name.as_str()) {
                    return Err(Error::InvalidSchema(format!(
                        "duplicate required property: {name}"
                    )));
                }
                if !object.properties.contains_key(name) {
                    return Err(Error::InvalidSchema(format!(
                        "required property not declared: {name}"
                    )));
                }
            }
            for nested in object.properties.values() {
                validate_schema(nested)?;
            }
            Ok(())
        }
        Schema::Array(array) => {
            if let Some(items) = &array.items {
                validate_schema(items)?;
            }
            Ok(())
        }
        Schema::Boolean | Schema::Null => Ok(()),
    }
}
