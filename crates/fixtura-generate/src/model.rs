use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Options for payload synthesis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Number of elements generated for array schemas.
    pub array_len: usize,
    /// Anchor date for synthesized `date-time` strings.
    pub base_date: NaiveDate,
    /// Seed for reproducible payloads; fresh OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            array_len: 1,
            base_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            seed: None,
        }
    }
}
