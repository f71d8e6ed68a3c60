use serde::{Deserialize, Serialize};

use super::defaults;

/// Variant generation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantConfig {
    /// Strategy names, cycled in order when generating variants.
    pub strategies: Vec<String>,
    /// Per-word drop probability for the `token_drop` noise model.
    pub token_drop_probability: f64,
    /// Maximum absolute shift applied by `numeric_perturb`.
    pub numeric_perturb_range: i64,
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self {
            strategies: defaults::DEFAULT_STRATEGIES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            token_drop_probability: defaults::DEFAULT_TOKEN_DROP_PROBABILITY,
            numeric_perturb_range: defaults::DEFAULT_NUMERIC_PERTURB_RANGE,
        }
    }
}
