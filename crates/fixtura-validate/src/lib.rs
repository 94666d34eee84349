//! Payload validation against Fixtura schemas.
//!
//! This crate walks a `serde_json::Value` against a [`fixtura_core::Schema`]
//! and reports shape problems as structured data rather than errors, plus a
//! named-schema registry for suite-wide reuse.

pub mod errors;
pub mod registry;
pub mod validate;

pub use errors::{ValidateError, ValidationError, ValidationResult};
pub use registry::SchemaRegistry;
pub use validate::validate;
