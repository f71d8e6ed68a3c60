use serde::{Deserialize, Serialize};

use super::defaults;

/// Logging configuration consumed by `ccr-observability`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive used when `CCR_LOG` is not set.
    pub log_filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: defaults::DEFAULT_LOG_FILTER.to_string(),
            json: defaults::DEFAULT_LOG_JSON,
        }
    }
}
