//! Ordered registry of variant strategies.

use std::fmt;
use std::sync::Arc;

use ccr_core::config::VariantConfig;
use ccr_core::errors::ConfigError;
use ccr_core::traits::IVariantStrategy;

use crate::strategies::{
    ContradictoryInformation, Identity, NumericPerturb, PartialInformation, Reframing, TokenDrop,
};

/// Strategies in the order the generator cycles through them.
#[derive(Clone, Default)]
pub struct StrategySet {
    strategies: Vec<Arc<dyn IVariantStrategy>>,
}

impl StrategySet {
    /// An empty set. Generating from it yields identity variants.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The five epistemic strategies, in their canonical order.
    pub fn standard() -> Self {
        Self::empty()
            .with(PartialInformation)
            .with(ContradictoryInformation)
            .with(Reframing::temporal_shift())
            .with(Reframing::perspective_shift())
            .with(Reframing::noisy_information())
    }

    /// Clean, token-drop and numeric-perturbation noise models.
    pub fn noise_models() -> Self {
        Self::empty()
            .with(Identity)
            .with(TokenDrop::default())
            .with(NumericPerturb::default())
    }

    /// Build the set named by `config.strategies`, in that order.
    pub fn from_config(config: &VariantConfig) -> Result<Self, ConfigError> {
        let mut set = Self::empty();
        for name in &config.strategies {
            set = match name.as_str() {
                PartialInformation::NAME => set.with(PartialInformation),
                ContradictoryInformation::NAME => set.with(ContradictoryInformation),
                "temporal_shift" => set.with(Reframing::temporal_shift()),
                "perspective_shift" => set.with(Reframing::perspective_shift()),
                "noisy_information" => set.with(Reframing::noisy_information()),
                Identity::NAME => set.with(Identity),
                TokenDrop::NAME => set.with(TokenDrop::new(config.token_drop_probability)),
                NumericPerturb::NAME => set.with(NumericPerturb::new(config.numeric_perturb_range)),
                other => {
                    return Err(ConfigError::ValidationFailed {
                        field: "variants.strategies".to_string(),
                        message: format!("unknown strategy '{other}'"),
                    })
                }
            };
        }
        Ok(set)
    }

    /// Append a strategy.
    pub fn with(mut self, strategy: impl IVariantStrategy + 'static) -> Self {
        self.strategies.push(Arc::new(strategy));
        self
    }

    /// Append an already-shared strategy.
    pub fn with_shared(mut self, strategy: Arc<dyn IVariantStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Strategy used for the zero-based variant `index` (`index mod len`).
    pub fn for_index(&self, index: usize) -> Option<&dyn IVariantStrategy> {
        if self.strategies.is_empty() {
            return None;
        }
        Some(self.strategies[index % self.strategies.len()].as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }
}

impl fmt::Debug for StrategySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategySet")
            .field("strategies", &self.names())
            .finish()
    }
}
