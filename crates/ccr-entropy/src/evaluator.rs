//! Turns any uncertainty source into an `UncertaintySignal`.

use ccr_core::config::RouteOptions;
use ccr_core::errors::CcrResult;
use ccr_core::models::UncertaintySignal;
use ccr_core::traits::{IUncertaintySource, UncertaintyEvidence};
use tracing::debug;

use crate::collapse::{collapse, CollapseConfig};
use crate::measures::{binary_entropy, distribution_entropy, normalized_entropy};

/// Uncertainty of a source with nothing to count.
const MAX_BINARY_ENTROPY: f64 = 1.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyEvaluator {
    collapse: CollapseConfig,
}

impl EntropyEvaluator {
    pub fn new(collapse: CollapseConfig) -> Self {
        Self { collapse }
    }

    pub fn from_options(options: &RouteOptions) -> Self {
        Self::new(CollapseConfig::from(options))
    }

    /// Assess a score model or a possible-worlds query alike.
    pub fn assess<S>(&self, source: &S) -> CcrResult<UncertaintySignal>
    where
        S: IUncertaintySource + ?Sized,
    {
        let signal = match source.evidence()? {
            UncertaintyEvidence::Distribution(values) => self.assess_scores(&values),
            UncertaintyEvidence::Proportion(Some(p)) => {
                let entropy = binary_entropy(p);
                UncertaintySignal {
                    entropy,
                    normalized_entropy: entropy,
                    collapse: false,
                }
            }
            UncertaintyEvidence::Proportion(None) => UncertaintySignal {
                entropy: MAX_BINARY_ENTROPY,
                normalized_entropy: MAX_BINARY_ENTROPY,
                collapse: false,
            },
        };
        debug!(
            entropy = signal.entropy,
            normalized_entropy = signal.normalized_entropy,
            collapse = signal.collapse,
            "uncertainty assessed"
        );
        Ok(signal)
    }

    /// Entropy, normalized entropy and collapse over a score set.
    pub fn assess_scores(&self, scores: &[f64]) -> UncertaintySignal {
        let entropy = distribution_entropy(scores);
        UncertaintySignal {
            entropy,
            normalized_entropy: normalized_entropy(entropy, scores.len()),
            collapse: collapse(scores, &self.collapse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_vectors_are_assessed_as_distributions() {
        let signal = EntropyEvaluator::default()
            .assess(&vec![0.5, 0.5, 0.5])
            .unwrap();
        assert!((signal.entropy - 3f64.ln()).abs() < 1e-6);
        assert!((signal.normalized_entropy - 1.0).abs() < 1e-6);
        assert!(signal.collapse);
    }

    #[test]
    fn slices_are_accepted_unsized() {
        let scores: &[f64] = &[1.0, 0.0];
        let signal = EntropyEvaluator::default().assess(scores).unwrap();
        assert_eq!(signal.entropy, 0.0);
    }
}
