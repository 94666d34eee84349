use fixtura_core::{Schema, validate_schema};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::Value;
use tracing::debug;

use crate::errors::GenerationError;
use crate::generators::generate_value;
use crate::merge::deep_merge;
use crate::model::GenerateOptions;

/// Schema-driven payload generator.
///
/// Owns its RNG, so repeated calls draw fresh values; construct with a
/// seeded [`GenerateOptions`] for reproducible fixtures. Structure is
/// deterministic every call: same keys, full required-field coverage.
#[derive(Debug)]
pub struct PayloadGenerator {
    options: GenerateOptions,
    rng: ChaCha8Rng,
}

impl Default for PayloadGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadGenerator {
    /// Create a generator with default options and fresh entropy.
    pub fn new() -> Self {
        Self::with_options(GenerateOptions::default())
    }

    /// Create a generator with explicit options.
    pub fn with_options(options: GenerateOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self { options, rng }
    }

    /// Generate a payload conforming to `schema`.
    ///
    /// Fails fast on a malformed schema; generation itself cannot fail.
    pub fn generate(&mut self, schema: &Schema) -> Result<Value, GenerationError> {
        validate_schema(schema)?;
        let payload = generate_value(schema, &self.options, &mut self.rng);
        debug!(kind = schema.type_name(), "payload generated");
        Ok(payload)
    }

    /// Generate a payload and deep-merge `overrides` on top.
    ///
    /// Overrides take precedence at every path. Keys the schema does not
    /// know about are carried through unvalidated; arrays and scalars are
    /// replaced wholesale.
    pub fn generate_with(
        &mut self,
        schema: &Schema,
        overrides: &Value,
    ) -> Result<Value, GenerationError> {
        let generated = self.generate(schema)?;
        Ok(deep_merge(generated, overrides.clone()))
    }
}
