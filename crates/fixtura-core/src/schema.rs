use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::formats::StringFormat;

/// Declarative description of an expected payload shape.
///
/// Schemas are pure data: loaded once (usually from a JSON fixture) and
/// reused across many validate/generate calls. The serde representation is
/// internally tagged on `type`, so schema documents read the way API test
/// suites write them:
///
/// ```json
/// {
///   "type": "object",
///   "required": ["id"],
///   "properties": { "id": { "type": "number" } }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Schema {
    String(StringSchema),
    Number(NumberSchema),
    Integer(IntegerSchema),
    Boolean,
    Object(ObjectSchema),
    Array(ArraySchema),
    Null,
}

impl Schema {
    /// Tag name of this schema node, as written in schema documents.
    pub fn type_name(&self) -> &'static str {
        match self {
            Schema::String(_) => "string",
            Schema::Number(_) => "number",
            Schema::Integer(_) => "integer",
            Schema::Boolean => "boolean",
            Schema::Object(_) => "object",
            Schema::Array(_) => "array",
            Schema::Null => "null",
        }
    }
}

/// String schema with optional enumeration and format refinement.
///
/// When both `enum` and `format` are present, every enum member must
/// satisfy the format (checked by [`crate::validate_schema`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StringSchema {
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<StringFormat>,
}

/// Number schema with an optional enumeration of allowed literals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NumberSchema {
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<f64>>,
}

/// Integer schema with an optional enumeration of allowed literals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IntegerSchema {
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<i64>>,
}

/// Object schema listing required property names and per-property schemas.
///
/// Every name in `required` must be a key of `properties`. Properties use a
/// `BTreeMap` so traversal and generation order are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ObjectSchema {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,
}

/// Array schema describing every element through `items`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ArraySchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
}
