//! Top-level router configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    AggregationConfig, EntropyConfig, ObservabilityConfig, RouteOptions, RouterConfig,
    VariantConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CCR_*`)
/// 2. TOML file passed to [`CcrConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CcrConfig {
    pub router: RouterConfig,
    pub variants: VariantConfig,
    pub entropy: EntropyConfig,
    pub aggregation: AggregationConfig,
    pub observability: ObservabilityConfig,
}

impl CcrConfig {
    /// Load a TOML file, apply `CCR_*` overrides, validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: CcrConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Compiled defaults plus `CCR_*` overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse from a TOML string. Missing keys fall back to defaults.
    /// String-only: `CCR_*` overrides are not applied.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: CcrConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        RouteOptions::from(self).validate()?;
        if self.variants.strategies.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "variants.strategies".to_string(),
                message: "at least one strategy is required".to_string(),
            });
        }
        if !(0.0..1.0).contains(&self.variants.token_drop_probability) {
            return Err(ConfigError::ValidationFailed {
                field: "variants.token_drop_probability".to_string(),
                message: "must be in [0.0, 1.0)".to_string(),
            });
        }
        if self.variants.numeric_perturb_range < 0 {
            return Err(ConfigError::ValidationFailed {
                field: "variants.numeric_perturb_range".to_string(),
                message: "must be non-negative".to_string(),
            });
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment variable overrides.
    /// Pattern: `CCR_ROUTER_VARIANT_COUNT`, `CCR_ENTROPY_THRESHOLD`, etc.
    /// Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Some(v) = env_parse::<usize>("CCR_ROUTER_VARIANT_COUNT") {
            self.router.variant_count = v;
        }
        if let Some(v) = env_parse::<u64>("CCR_ROUTER_PER_CALL_TIMEOUT_MS") {
            self.router.per_call_timeout_ms = v;
        }
        if let Some(v) = env_parse::<u64>("CCR_ROUTER_WHOLE_CALL_TIMEOUT_MS") {
            self.router.whole_call_timeout_ms = v;
        }
        if let Some(v) = env_parse::<usize>("CCR_ROUTER_MAX_CONCURRENCY") {
            self.router.max_concurrency = Some(v);
        }
        if let Some(v) = env_parse::<u64>("CCR_ROUTER_SEED") {
            self.router.seed = Some(v);
        }
        if let Some(v) = env_parse::<f64>("CCR_ENTROPY_THRESHOLD") {
            self.entropy.entropy_threshold = v;
        }
        if let Some(v) = env_parse::<f64>("CCR_AGGREGATION_VARIANCE_PENALTY") {
            self.aggregation.variance_penalty = v;
        }
        if let Some(v) = env_parse::<f64>("CCR_AGGREGATION_SENSITIVITY_THRESHOLD") {
            self.aggregation.sensitivity_threshold = v;
        }
        if let Some(v) = env_parse::<bool>("CCR_LOG_JSON") {
            self.observability.json = v;
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|val| val.trim().parse().ok())
}
