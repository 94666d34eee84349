use chrono::{NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat};
use fixtura_core::{Schema, StringFormat};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde_json::{Map, Number, Value};

use crate::model::GenerateOptions;

/// Produce a value conforming to a well-formed schema.
///
/// Callers wanting seeded determinism and override merging should go
/// through [`crate::PayloadGenerator`]; this is the raw synthesis step.
/// Enum schemas always yield a listed member, never a synthesized value.
/// Object output covers every `required` name regardless of `properties`
/// iteration order.
pub fn generate_value(
    schema: &Schema,
    options: &GenerateOptions,
    rng: &mut impl Rng,
) -> Value {
    match schema {
        Schema::String(string) => {
            if let Some(value) = string.allowed.as_deref().and_then(|allowed| allowed.choose(rng)) {
                return Value::String(value.clone());
            }
            let text = match string.format {
                Some(StringFormat::Email) => random_email(rng),
                Some(StringFormat::Uri) => random_uri(rng),
                Some(StringFormat::DateTime) => random_timestamp(options.base_date, rng),
                None => random_text(rng),
            };
            Value::String(text)
        }
        Schema::Number(number) => {
            let value = match number.allowed.as_deref().and_then(|allowed| allowed.choose(rng)) {
                Some(member) => *member,
                None => rng.random_range(0.0..=100_000.0),
            };
            Number::from_f64(value)
                .map(Value::Number)
                .unwrap_or_else(|| Value::from(0))
        }
        Schema::Integer(integer) => {
            match integer.allowed.as_deref().and_then(|allowed| allowed.choose(rng)) {
                Some(member) => Value::from(*member),
                None => Value::from(rng.random_range(1..=100_000_i64)),
            }
        }
        Schema::Boolean => Value::Bool(rng.random_bool(0.5)),
        Schema::Object(object) => {
            let mut map = Map::new();
            for (name, property) in &object.properties {
                map.insert(name.clone(), generate_value(property, options, rng));
            }
            for name in &object.required {
                map.entry(name.clone()).or_insert(Value::Null);
            }
            Value::Object(map)
        }
        Schema::Array(array) => {
            let elements = match &array.items {
                Some(items) => (0..options.array_len)
                    .map(|_| generate_value(items, options, rng))
                    .collect(),
                None => Vec::new(),
            };
            Value::Array(elements)
        }
        Schema::Null => Value::Null,
    }
}

fn random_text(rng: &mut impl Rng) -> String {
    format!("value_{:08x}", rng.random::<u32>())
}

fn random_email(rng: &mut impl Rng) -> String {
    let user = format!("user{:04}", rng.random_range(1..=9999));
    format!("{user}@example.com")
}

fn random_uri(rng: &mut impl Rng) -> String {
    format!("https://example.com/resources/{}", rng.random_range(1..=9999))
}

fn random_timestamp(base_date: NaiveDate, rng: &mut impl Rng) -> String {
    let date = base_date + chrono::Duration::days(rng.random_range(0..=365));
    let seconds = rng.random_range(0..=86_399);
    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
        .unwrap_or_else(|| NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    NaiveDateTime::new(date, time)
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}
