use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use fixtura_core::{Schema, validate_schema};
use serde_json::Value;
use tracing::debug;

use crate::errors::{Result, ValidateError, ValidationResult};
use crate::validate::check;

/// Named-schema store shared across a test suite.
///
/// The registry is owned by the caller and passed where needed rather than
/// living in process-wide state. Schemas are validated at registration, so
/// later lookups walk them without re-checking. Entries are only ever added
/// or replaced; registration is expected during suite setup, steady-state
/// traffic is concurrent reads.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: RwLock<HashMap<String, Arc<Schema>>>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema under a name, replacing any previous entry.
    ///
    /// Fails fast when the schema violates internal invariants.
    pub fn add_schema(&self, name: impl Into<String>, schema: Schema) -> Result<()> {
        validate_schema(&schema)?;
        let name = name.into();
        debug!(name = %name, kind = schema.type_name(), "schema registered");
        self.schemas
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name, Arc::new(schema));
        Ok(())
    }

    /// Parse a JSON schema document and register it under a name.
    pub fn add_schema_json(&self, name: impl Into<String>, document: &str) -> Result<()> {
        let schema: Schema = serde_json::from_str(document)?;
        self.add_schema(name, schema)
    }

    /// Look up a registered schema.
    pub fn get(&self, name: &str) -> Option<Arc<Schema>> {
        self.schemas
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Validate a value against the schema registered under `name`.
    ///
    /// An unknown name is a [`ValidateError::SchemaNotFound`] error, not a
    /// failed result: it indicates a test-authoring mistake.
    pub fn validate_named(&self, name: &str, value: &Value) -> Result<ValidationResult> {
        let schema = self
            .get(name)
            .ok_or_else(|| ValidateError::SchemaNotFound(name.to_string()))?;
        Ok(check(&schema, value))
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true when no schema has been registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
