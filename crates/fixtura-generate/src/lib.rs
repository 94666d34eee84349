//! Schema-driven payload synthesis for Fixtura.
//!
//! This crate turns a [`fixtura_core::Schema`] into a conforming
//! `serde_json::Value`, optionally deep-merging caller overrides on top of
//! the generated structure. Payloads generated here are commonly
//! round-tripped through `fixtura-validate` in test assertions.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod merge;
pub mod model;

pub use engine::PayloadGenerator;
pub use errors::GenerationError;
pub use merge::deep_merge;
pub use model::GenerateOptions;
