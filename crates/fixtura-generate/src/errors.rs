use thiserror::Error;

/// Errors emitted by the payload generator.
///
/// Generation is infallible for well-formed schemas; the only failure mode
/// is being handed a schema that violates internal invariants.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Schema(#[from] fixtura_core::Error),
}
