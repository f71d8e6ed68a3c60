//! Property tests for entropy and collapse.

use proptest::prelude::*;

use ccr_entropy::{binary_entropy, collapse, distribution_entropy, normalized_entropy, CollapseConfig};

proptest! {
    #[test]
    fn prop_entropy_bounded_by_ln_n(values in prop::collection::vec(0.0f64..10.0, 1..30)) {
        let h = distribution_entropy(&values);
        prop_assert!(h >= 0.0);
        prop_assert!(h <= (values.len() as f64).ln() + 1e-6);
    }

    #[test]
    fn prop_entropy_is_scale_invariant(
        values in prop::collection::vec(0.01f64..1.0, 2..20),
        scale in 0.1f64..100.0,
    ) {
        let scaled: Vec<f64> = values.iter().map(|v| v * scale).collect();
        prop_assert!((distribution_entropy(&values) - distribution_entropy(&scaled)).abs() < 1e-6);
    }

    #[test]
    fn prop_entropy_is_permutation_invariant(mut values in prop::collection::vec(0.0f64..1.0, 1..20)) {
        let h = distribution_entropy(&values);
        values.reverse();
        prop_assert!((h - distribution_entropy(&values)).abs() < 1e-9);
    }

    #[test]
    fn prop_binary_entropy_is_symmetric(p in 0.0f64..=1.0) {
        prop_assert!((binary_entropy(p) - binary_entropy(1.0 - p)).abs() < 1e-9);
        prop_assert!((0.0..=1.0 + 1e-12).contains(&binary_entropy(p)));
    }

    #[test]
    fn prop_normalized_entropy_in_unit_interval(
        values in prop::collection::vec(0.0f64..1.0, 0..20),
    ) {
        let n = normalized_entropy(distribution_entropy(&values), values.len());
        prop_assert!((0.0..=1.0).contains(&n));
    }

    #[test]
    fn prop_constant_scores_always_collapse(value in 0.0f64..=1.0, n in 2usize..10) {
        prop_assert!(collapse(&vec![value; n], &CollapseConfig::default()));
    }

    #[test]
    fn prop_collapse_is_permutation_invariant(mut values in prop::collection::vec(0.0f64..1.0, 0..10)) {
        let config = CollapseConfig::default();
        let before = collapse(&values, &config);
        values.reverse();
        prop_assert_eq!(before, collapse(&values, &config));
    }
}
