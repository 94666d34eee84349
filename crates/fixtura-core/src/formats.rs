use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime};
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+$").expect("email pattern")
});

/// String-refinement tag applicable to `string` schemas.
///
/// The predicates behind each tag are a fixed contract: tests assert on
/// their exact strictness, so changes here are breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum StringFormat {
    Email,
    Uri,
    DateTime,
}

impl StringFormat {
    /// Check a string against this format's predicate.
    pub fn matches(self, value: &str) -> bool {
        match self {
            StringFormat::Email => is_email(value),
            StringFormat::Uri => is_uri(value),
            StringFormat::DateTime => is_date_time(value),
        }
    }

    /// Tag name as written in schema documents.
    pub fn as_str(self) -> &'static str {
        match self {
            StringFormat::Email => "email",
            StringFormat::Uri => "uri",
            StringFormat::DateTime => "date-time",
        }
    }
}

impl fmt::Display for StringFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-line `local@domain` shape with at least one dot in the domain.
pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// `http://` or `https://` scheme followed by a non-empty remainder.
pub fn is_uri(value: &str) -> bool {
    value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .is_some_and(|rest| !rest.is_empty())
}

/// RFC 3339 timestamp, or a naive `YYYY-MM-DDTHH:MM:SS[.f]` date-time.
/// Date-only strings are rejected.
pub fn is_date_time(value: &str) -> bool {
    DateTime::parse_from_rfc3339(value).is_ok()
        || NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
}
