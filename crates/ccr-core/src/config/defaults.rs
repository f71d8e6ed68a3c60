//! Compiled defaults for every tunable.

// Router
pub const DEFAULT_VARIANT_COUNT: usize = 3;
pub const DEFAULT_PER_CALL_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_WHOLE_CALL_TIMEOUT_MS: u64 = 120_000;

// Variants
pub const DEFAULT_STRATEGIES: &[&str] = &[
    "partial_information",
    "contradictory_information",
    "temporal_shift",
    "perspective_shift",
    "noisy_information",
];
pub const DEFAULT_TOKEN_DROP_PROBABILITY: f64 = 0.15;
pub const DEFAULT_NUMERIC_PERTURB_RANGE: i64 = 2;

// Entropy
pub const DEFAULT_ENTROPY_THRESHOLD: f64 = 1.0;
pub const DEFAULT_COLLAPSE_TOLERANCE: f64 = 0.05;
pub const DEFAULT_COLLAPSE_CONFIDENCE: f64 = 0.8;

// Aggregation
pub const DEFAULT_VARIANCE_PENALTY: f64 = 0.3;
pub const DEFAULT_SENSITIVITY_THRESHOLD: f64 = 0.3;

// Observability
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
