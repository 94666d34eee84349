use serde_json::Value;

/// Deep-merge `overrides` onto `base`.
///
/// Objects merge key by key, recursing into nested objects; override keys
/// absent from the base are inserted as-is. Arrays and scalars are replaced
/// wholesale.
pub fn deep_merge(base: Value, overrides: Value) -> Value {
    match (base, overrides) {
        (Value::Object(mut merged), Value::Object(overrides)) => {
            for (key, override_value) in overrides {
                let value = match merged.remove(&key) {
                    Some(existing) => deep_merge(existing, override_value),
                    None => override_value,
                };
                merged.insert(key, value);
            }
            Value::Object(merged)
        }
        (_, overrides) => overrides,
    }
}
