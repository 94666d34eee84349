//! Core contracts and helpers for Fixtura.
//!
//! This crate defines the canonical schema model, the string-format
//! predicates, and the well-formedness validation shared by the validator
//! and the payload generator.

pub mod error;
pub mod formats;
pub mod schema;
pub mod validation;

pub use error::{Error, Result};
pub use formats::{StringFormat, is_date_time, is_email, is_uri};
pub use schema::{ArraySchema, IntegerSchema, NumberSchema, ObjectSchema, Schema, StringSchema};
pub use validation::validate_schema;
