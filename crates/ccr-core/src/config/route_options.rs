//! Per-call routing options.

use std::time::Duration;

use super::{defaults, CcrConfig};
use crate::errors::ConfigError;

/// Knobs for one `route` call. `Default` mirrors the compiled defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteOptions {
    pub variant_count: usize,
    pub variance_penalty: f64,
    pub entropy_threshold: f64,
    pub sensitivity_threshold: f64,
    pub collapse_tolerance: f64,
    pub collapse_confidence: f64,
    pub per_call_timeout: Duration,
    pub whole_call_timeout: Duration,
    pub max_concurrency: Option<usize>,
    pub seed: Option<u64>,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            variant_count: defaults::DEFAULT_VARIANT_COUNT,
            variance_penalty: defaults::DEFAULT_VARIANCE_PENALTY,
            entropy_threshold: defaults::DEFAULT_ENTROPY_THRESHOLD,
            sensitivity_threshold: defaults::DEFAULT_SENSITIVITY_THRESHOLD,
            collapse_tolerance: defaults::DEFAULT_COLLAPSE_TOLERANCE,
            collapse_confidence: defaults::DEFAULT_COLLAPSE_CONFIDENCE,
            per_call_timeout: Duration::from_millis(defaults::DEFAULT_PER_CALL_TIMEOUT_MS),
            whole_call_timeout: Duration::from_millis(defaults::DEFAULT_WHOLE_CALL_TIMEOUT_MS),
            max_concurrency: None,
            seed: None,
        }
    }
}

impl From<&CcrConfig> for RouteOptions {
    fn from(config: &CcrConfig) -> Self {
        Self {
            variant_count: config.router.variant_count,
            variance_penalty: config.aggregation.variance_penalty,
            entropy_threshold: config.entropy.entropy_threshold,
            sensitivity_threshold: config.aggregation.sensitivity_threshold,
            collapse_tolerance: config.entropy.collapse_tolerance,
            collapse_confidence: config.entropy.collapse_confidence,
            per_call_timeout: Duration::from_millis(config.router.per_call_timeout_ms),
            whole_call_timeout: Duration::from_millis(config.router.whole_call_timeout_ms),
            max_concurrency: config.router.max_concurrency,
            seed: config.router.seed,
        }
    }
}

impl RouteOptions {
    /// Same options with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Same options with a different variant count.
    pub fn with_variant_count(mut self, count: usize) -> Self {
        self.variant_count = count;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("aggregation.variance_penalty", self.variance_penalty)?;
        non_negative("aggregation.sensitivity_threshold", self.sensitivity_threshold)?;
        non_negative("entropy.entropy_threshold", self.entropy_threshold)?;
        unit_interval("entropy.collapse_tolerance", self.collapse_tolerance)?;
        unit_interval("entropy.collapse_confidence", self.collapse_confidence)?;
        if self.per_call_timeout.is_zero() {
            return Err(invalid("router.per_call_timeout_ms", "must be greater than 0"));
        }
        if self.whole_call_timeout.is_zero() {
            return Err(invalid("router.whole_call_timeout_ms", "must be greater than 0"));
        }
        if self.max_concurrency == Some(0) {
            return Err(invalid("router.max_concurrency", "must be greater than 0"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.into(),
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(field, "must be a finite, non-negative number"));
    }
    Ok(())
}

fn unit_interval(field: &str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(invalid(field, "must be between 0.0 and 1.0"));
    }
    Ok(())
}
