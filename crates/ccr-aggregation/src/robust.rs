//! Worst-case aggregation of one action's score vector.

use ccr_core::models::{Action, CellScore, RobustnessAssessment};

/// Summary statistics over usable scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreStats {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
    /// Population variance.
    pub variance: f64,
    pub count: usize,
}

impl ScoreStats {
    /// Non-finite entries are skipped; `None` when nothing is left.
    pub fn from_scores(scores: &[f64]) -> Option<Self> {
        let scores: Vec<f64> = scores.iter().copied().filter(|s| s.is_finite()).collect();
        if scores.is_empty() {
            return None;
        }
        let n = scores.len() as f64;
        let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // Summation error can push the mean a ulp outside [min, max].
        let mean = (scores.iter().sum::<f64>() / n).clamp(min, max);
        let variance = (scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n).max(0.0);
        Some(Self {
            min,
            mean,
            max,
            variance,
            count: scores.len(),
        })
    }
}

/// `clamp(min − penalty · variance, 0, 1)`.
pub fn robustness_score(stats: &ScoreStats, variance_penalty: f64) -> f64 {
    (stats.min - variance_penalty * stats.variance).clamp(0.0, 1.0)
}

/// Assess one action over its cells. Unavailable cells are excluded; an
/// action with no usable score is inconclusive (`None`).
pub fn aggregate(
    action: &Action,
    cells: &[CellScore],
    variance_penalty: f64,
    sensitivity_threshold: f64,
) -> Option<RobustnessAssessment> {
    let scores: Vec<f64> = cells.iter().filter_map(CellScore::value).collect();
    let stats = ScoreStats::from_scores(&scores)?;
    let sensitivity = stats.max - stats.min;

    Some(RobustnessAssessment {
        action: action.clone(),
        min_score: stats.min,
        mean_score: stats.mean,
        max_score: stats.max,
        variance: stats.variance,
        robustness_score: robustness_score(&stats, variance_penalty),
        sensitivity,
        is_robust: sensitivity < sensitivity_threshold,
        scored_variants: stats.count,
        unavailable_variants: cells.len() - stats.count,
    })
}
