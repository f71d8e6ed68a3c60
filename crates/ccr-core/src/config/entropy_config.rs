use serde::{Deserialize, Serialize};

use super::defaults;

/// Uncertainty gating configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntropyConfig {
    /// Defer when distribution entropy (nats) strictly exceeds this.
    pub entropy_threshold: f64,
    /// Scores within this distance of each other count as tied.
    pub collapse_tolerance: f64,
    /// Both leaders must exceed this for a top-two tie to count as collapse.
    pub collapse_confidence: f64,
}

impl Default for EntropyConfig {
    fn default() -> Self {
        Self {
            entropy_threshold: defaults::DEFAULT_ENTROPY_THRESHOLD,
            collapse_tolerance: defaults::DEFAULT_COLLAPSE_TOLERANCE,
            collapse_confidence: defaults::DEFAULT_COLLAPSE_CONFIDENCE,
        }
    }
}
