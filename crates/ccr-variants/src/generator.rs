//! Variant generation: apply strategies in order, annotate each result.

use ccr_core::models::Variant;
use rand::RngCore;
use tracing::{debug, warn};

use crate::metrics::{degradation_level, epistemic_distance};
use crate::strategies::Identity;
use crate::StrategySet;

/// Produces `count` labeled possible worlds from one context.
///
/// Stateless between calls; all randomness comes from the caller's rng, so a
/// seeded rng reproduces the same variants.
#[derive(Debug, Clone)]
pub struct VariantGenerator {
    strategies: StrategySet,
}

impl Default for VariantGenerator {
    fn default() -> Self {
        Self::new(StrategySet::standard())
    }
}

impl VariantGenerator {
    pub fn new(strategies: StrategySet) -> Self {
        Self { strategies }
    }

    pub fn strategies(&self) -> &StrategySet {
        &self.strategies
    }

    /// Generate exactly `count` variants, ids `V1..V{count}`.
    ///
    /// Never fails: a strategy that yields nothing (or a blank string) is
    /// replaced by the identity transformation for that variant.
    pub fn generate(&self, context: &str, count: usize, rng: &mut dyn RngCore) -> Vec<Variant> {
        (0..count)
            .map(|index| self.generate_one(context, index, rng))
            .collect()
    }

    fn generate_one(&self, context: &str, index: usize, rng: &mut dyn RngCore) -> Variant {
        let (strategy, content) = match self.strategies.for_index(index) {
            Some(strategy) => match strategy.apply(context, rng) {
                Some(content) if !content.trim().is_empty() => (strategy.name(), content),
                _ => {
                    warn!(
                        strategy = strategy.name(),
                        variant = index + 1,
                        "strategy produced no content, falling back to identity"
                    );
                    (Identity::NAME, context.to_string())
                }
            },
            None => (Identity::NAME, context.to_string()),
        };

        let variant = Variant {
            id: Variant::id_for(index),
            strategy: strategy.to_string(),
            degradation_level: degradation_level(context, &content),
            epistemic_distance: epistemic_distance(context, &content),
            content,
        };
        debug!(
            variant = %variant.id,
            strategy = %variant.strategy,
            degradation = variant.degradation_level,
            distance = variant.epistemic_distance,
            "variant generated"
        );
        variant
    }
}
