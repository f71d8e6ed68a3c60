//! Matrix aggregation: one assessment per action, computed in parallel.

use ccr_core::config::{AggregationConfig, RouteOptions};
use ccr_core::models::{Action, CellScore, RobustnessAssessment};
use rayon::prelude::*;
use tracing::debug;

use crate::ranking::rank;
use crate::robust::aggregate;

/// Ranked conclusive assessments plus the actions that had no usable score.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub ranked: Vec<RobustnessAssessment>,
    pub inconclusive: Vec<Action>,
}

impl Aggregation {
    pub fn robustness_scores(&self) -> Vec<f64> {
        self.ranked.iter().map(|a| a.robustness_score).collect()
    }

    pub fn top(&self) -> Option<&RobustnessAssessment> {
        self.ranked.first()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobustAggregator {
    variance_penalty: f64,
    sensitivity_threshold: f64,
}

impl Default for RobustAggregator {
    fn default() -> Self {
        Self::from_config(&AggregationConfig::default())
    }
}

impl RobustAggregator {
    pub fn new(variance_penalty: f64, sensitivity_threshold: f64) -> Self {
        Self {
            variance_penalty,
            sensitivity_threshold,
        }
    }

    pub fn from_config(config: &AggregationConfig) -> Self {
        Self::new(config.variance_penalty, config.sensitivity_threshold)
    }

    pub fn from_options(options: &RouteOptions) -> Self {
        Self::new(options.variance_penalty, options.sensitivity_threshold)
    }

    pub fn variance_penalty(&self) -> f64 {
        self.variance_penalty
    }

    /// Assess a single action.
    pub fn assess(&self, action: &Action, cells: &[CellScore]) -> Option<RobustnessAssessment> {
        aggregate(
            action,
            cells,
            self.variance_penalty,
            self.sensitivity_threshold,
        )
    }

    /// Assess every action against its row of `matrix` (row `i` belongs to
    /// `actions[i]`) and rank the conclusive ones.
    pub fn aggregate_matrix(&self, actions: &[Action], matrix: &[Vec<CellScore>]) -> Aggregation {
        debug_assert_eq!(actions.len(), matrix.len());

        let assessed: Vec<(&Action, Option<RobustnessAssessment>)> = actions
            .par_iter()
            .zip(matrix.par_iter())
            .map(|(action, row)| (action, self.assess(action, row)))
            .collect();

        let mut conclusive = Vec::with_capacity(assessed.len());
        let mut inconclusive = Vec::new();
        for (action, assessment) in assessed {
            match assessment {
                Some(assessment) => {
                    debug!(
                        action = %action.id,
                        robustness = assessment.robustness_score,
                        min = assessment.min_score,
                        variance = assessment.variance,
                        unavailable = assessment.unavailable_variants,
                        "action assessed"
                    );
                    conclusive.push(assessment);
                }
                None => {
                    debug!(action = %action.id, "action inconclusive: no usable scores");
                    inconclusive.push(action.clone());
                }
            }
        }

        Aggregation {
            ranked: rank(conclusive),
            inconclusive,
        }
    }
}
