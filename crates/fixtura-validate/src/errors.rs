use serde::Serialize;
use thiserror::Error;

/// A single validation failure with the path to the offending value.
///
/// Paths use dotted/bracketed accessors relative to the validated root,
/// e.g. `user.id` or `[1].id`; the root itself is the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Outcome of validating a value against a schema.
///
/// `errors` is `None` when the value passed, so an empty list never
/// masquerades as a failure report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Option<Vec<ValidationError>>,
}

impl ValidationResult {
    /// Build a result from accumulated errors.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        if errors.is_empty() {
            Self {
                valid: true,
                errors: None,
            }
        } else {
            Self {
                valid: false,
                errors: Some(errors),
            }
        }
    }

    /// Returns true when the value passed validation.
    pub fn is_ok(&self) -> bool {
        self.valid
    }

    /// Error messages in report order, for assertions and diagnostics.
    pub fn messages(&self) -> Vec<&str> {
        self.errors
            .iter()
            .flatten()
            .map(|error| error.message.as_str())
            .collect()
    }
}

/// Validation failures that are not value-shape issues.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// No schema registered under the requested name.
    #[error("schema not found: {0}")]
    SchemaNotFound(String),
    /// The schema itself violates internal invariants.
    #[error(transparent)]
    Schema(#[from] fixtura_core::Error),
    /// A schema document could not be parsed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidateError>;
