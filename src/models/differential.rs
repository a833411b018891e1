use serde::{Deserialize, Serialize};

/// One ranked entry in a differential-diagnosis list.
///
/// The external service is asked to make likelihoods across a list sum to
/// roughly 100; only the fallback tables guarantee the sum exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifferentialEntry {
    pub diagnosis: String,
    /// Likelihood percentage, 0-100.
    pub likelihood: u8,
    pub reasoning: String,
    pub key_feature: String,
}

impl DifferentialEntry {
    pub fn new(diagnosis: &str, likelihood: u8, reasoning: &str, key_feature: &str) -> Self {
        Self {
            diagnosis: diagnosis.to_string(),
            likelihood,
            reasoning: reasoning.to_string(),
            key_feature: key_feature.to_string(),
        }
    }
}
