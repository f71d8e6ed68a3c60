use serde::{Deserialize, Serialize};

use super::defaults;

/// Robust aggregation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Weight of the variance penalty in `min - penalty * variance`.
    pub variance_penalty: f64,
    /// An action is robust when `max - min` is strictly below this.
    pub sensitivity_threshold: f64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            variance_penalty: defaults::DEFAULT_VARIANCE_PENALTY,
            sensitivity_threshold: defaults::DEFAULT_SENSITIVITY_THRESHOLD,
        }
    }
}
