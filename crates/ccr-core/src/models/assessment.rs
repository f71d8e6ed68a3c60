use serde::{Deserialize, Serialize};

use super::Action;

/// Summary of one action's behaviour across all epistemic variants.
///
/// Derived deterministically from the action's usable scores.
/// Invariants: `min_score <= mean_score <= max_score`, `robustness_score` in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobustnessAssessment {
    pub action: Action,
    /// Worst-case plausibility across variants.
    pub min_score: f64,
    pub mean_score: f64,
    pub max_score: f64,
    /// Population variance of the usable scores.
    pub variance: f64,
    /// `clamp(min − λ·variance, 0, 1)`.
    pub robustness_score: f64,
    /// `max − min`.
    pub sensitivity: f64,
    /// Sensitivity below the configured threshold.
    pub is_robust: bool,
    /// Variants that produced a usable score.
    pub scored_variants: usize,
    /// Variants whose cell was unavailable.
    pub unavailable_variants: usize,
}

impl RobustnessAssessment {
    /// `1 − min(1, sensitivity)`.
    pub fn stability(&self) -> f64 {
        1.0 - self.sensitivity.min(1.0)
    }
}
