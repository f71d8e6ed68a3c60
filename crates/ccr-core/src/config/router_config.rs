use serde::{Deserialize, Serialize};

use super::defaults;

/// Router-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Number of epistemic variants generated per call.
    pub variant_count: usize,
    /// Timeout for a single oracle call (milliseconds).
    pub per_call_timeout_ms: u64,
    /// Deadline for the whole scoring phase (milliseconds).
    pub whole_call_timeout_ms: u64,
    /// Upper bound on in-flight oracle calls. `None` means unbounded.
    pub max_concurrency: Option<usize>,
    /// Fixed seed for variant generation. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            variant_count: defaults::DEFAULT_VARIANT_COUNT,
            per_call_timeout_ms: defaults::DEFAULT_PER_CALL_TIMEOUT_MS,
            whole_call_timeout_ms: defaults::DEFAULT_WHOLE_CALL_TIMEOUT_MS,
            max_concurrency: None,
            seed: None,
        }
    }
}
