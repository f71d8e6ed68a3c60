//! Property tests for robust aggregation and ranking.

use proptest::prelude::*;

use ccr_aggregation::{aggregate, rank, robustness_score, RobustAggregator, ScoreStats};
use ccr_core::models::{Action, CellScore};

fn cells(values: &[f64]) -> Vec<CellScore> {
    values.iter().map(|v| CellScore::scored(*v)).collect()
}

fn scores() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..=1.0, 1..12)
}

proptest! {
    #[test]
    fn prop_assessment_invariants(values in scores(), penalty in 0.0f64..2.0) {
        let a = aggregate(&Action::from_label("x"), &cells(&values), penalty, 0.3).unwrap();
        prop_assert!(a.min_score <= a.mean_score && a.mean_score <= a.max_score);
        prop_assert!((0.0..=1.0).contains(&a.robustness_score));
        prop_assert!(a.robustness_score <= a.min_score);
        prop_assert!(a.variance >= 0.0);
        prop_assert_eq!(a.is_robust, a.sensitivity < 0.3);
    }

    /// Raising any score that stays at or below the vector's mean (raising the
    /// minimum included) never lowers robustness.
    #[test]
    fn prop_raising_a_below_mean_score_never_lowers_robustness(
        values in scores(),
        index in any::<prop::sample::Index>(),
        fraction in 0.0f64..=1.0,
        penalty in 0.0f64..2.0,
    ) {
        let stats = ScoreStats::from_scores(&values).unwrap();
        let i = index.index(values.len());
        prop_assume!(values[i] < stats.mean);

        let mut raised = values.clone();
        raised[i] = values[i] + fraction * (stats.mean - values[i]);

        let before = robustness_score(&stats, penalty);
        let after = robustness_score(&ScoreStats::from_scores(&raised).unwrap(), penalty);
        prop_assert!(after >= before - 1e-12, "before {before}, after {after}");
    }

    #[test]
    fn prop_uniform_shift_of_every_score_never_lowers_robustness(
        values in prop::collection::vec(0.0f64..=0.5, 1..12),
        shift in 0.0f64..=0.5,
        penalty in 0.0f64..2.0,
    ) {
        let shifted: Vec<f64> = values.iter().map(|v| v + shift).collect();
        let before = robustness_score(&ScoreStats::from_scores(&values).unwrap(), penalty);
        let after = robustness_score(&ScoreStats::from_scores(&shifted).unwrap(), penalty);
        prop_assert!(after >= before - 1e-12);
    }

    #[test]
    fn prop_ranking_is_sorted_and_a_permutation(rows in prop::collection::vec(scores(), 1..8)) {
        let actions: Vec<Action> = (0..rows.len()).map(|i| Action::from_label(format!("a{i}"))).collect();
        let matrix: Vec<Vec<CellScore>> = rows.iter().map(|r| cells(r)).collect();
        let aggregation = RobustAggregator::default().aggregate_matrix(&actions, &matrix);

        prop_assert_eq!(aggregation.ranked.len(), actions.len());
        for pair in aggregation.ranked.windows(2) {
            prop_assert!(pair[0].robustness_score >= pair[1].robustness_score);
        }
        let mut seen: Vec<&str> = aggregation.ranked.iter().map(|a| a.action.id.as_str()).collect();
        seen.sort();
        let mut expected: Vec<&str> = actions.iter().map(|a| a.id.as_str()).collect();
        expected.sort();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn prop_rank_is_idempotent(rows in prop::collection::vec(scores(), 1..8)) {
        let assessed: Vec<_> = rows
            .iter()
            .enumerate()
            .filter_map(|(i, r)| aggregate(&Action::from_label(format!("a{i}")), &cells(r), 0.3, 0.3))
            .collect();
        let once = rank(assessed);
        let twice = rank(once.clone());
        prop_assert_eq!(once, twice);
    }
}
