//! Offline evaluation metrics for comparing routing strategies.

use crate::robust::ScoreStats;

/// `1 − min(1, σ/μ)`. 0 for an empty vector or a zero mean.
pub fn cv_robustness(scores: &[f64]) -> f64 {
    match ScoreStats::from_scores(scores) {
        Some(stats) if stats.mean != 0.0 => {
            let cv = stats.variance.sqrt() / stats.mean;
            1.0 - cv.min(1.0)
        }
        _ => 0.0,
    }
}

/// Relative change of the worst case: `(min_new − min_base) / min_base`.
/// 0 when either side is empty or the baseline worst case is 0.
pub fn worst_case_improvement(baseline: &[f64], candidate: &[f64]) -> f64 {
    match (
        ScoreStats::from_scores(baseline),
        ScoreStats::from_scores(candidate),
    ) {
        (Some(base), Some(new)) if base.min != 0.0 => (new.min - base.min) / base.min,
        _ => 0.0,
    }
}

/// Spread between the best and worst variant. An empty vector is maximally
/// uncertain (1.0).
pub fn epistemic_gap(scores: &[f64]) -> f64 {
    ScoreStats::from_scores(scores).map_or(1.0, |s| s.max - s.min)
}

/// `(var_base − var_new) / var_base` clipped to [−1, 1]; 0 for a zero baseline.
pub fn variance_reduction(baseline_variance: f64, candidate_variance: f64) -> f64 {
    if baseline_variance == 0.0 {
        return 0.0;
    }
    ((baseline_variance - candidate_variance) / baseline_variance).clamp(-1.0, 1.0)
}

/// `clamp(min · (1 − variance), 0, 1)`: the multiplicative alternative to the
/// variance-penalized worst case.
pub fn stability_weighted_robustness(scores: &[f64]) -> f64 {
    ScoreStats::from_scores(scores).map_or(0.0, |s| (s.min * (1.0 - s.variance)).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cv_robustness_of_constant_scores_is_one() {
        assert_eq!(cv_robustness(&[0.4, 0.4, 0.4]), 1.0);
        assert_eq!(cv_robustness(&[]), 0.0);
        assert_eq!(cv_robustness(&[0.0, 0.0]), 0.0);
    }

    #[test]
    fn worst_case_improvement_is_relative() {
        assert!((worst_case_improvement(&[0.2, 0.9], &[0.3, 0.5]) - 0.5).abs() < 1e-12);
        assert_eq!(worst_case_improvement(&[0.0, 0.9], &[0.3]), 0.0);
        assert_eq!(worst_case_improvement(&[], &[0.3]), 0.0);
    }

    #[test]
    fn epistemic_gap_bounds() {
        assert_eq!(epistemic_gap(&[]), 1.0);
        assert!((epistemic_gap(&[0.9, 0.1, 0.85]) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn variance_reduction_is_clipped() {
        assert_eq!(variance_reduction(0.0, 0.5), 0.0);
        assert_eq!(variance_reduction(0.1, 0.5), -1.0);
        assert!((variance_reduction(0.2, 0.05) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn stability_weighted_robustness_of_consistent_scores() {
        let r = stability_weighted_robustness(&[0.8, 0.75, 0.82]);
        assert!(r > 0.749 && r < 0.75);
        assert_eq!(stability_weighted_robustness(&[]), 0.0);
    }
}
