//! Property tests for variant generation.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use ccr_variants::metrics::{degradation_level, epistemic_distance};
use ccr_variants::{StrategySet, VariantGenerator};

fn context_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Za-z0-9]{1,8}[.!?]?", 1..120).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn prop_exact_count_non_empty_bounded_metadata(
        context in context_strategy(),
        count in 0usize..12,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let variants = VariantGenerator::default().generate(&context, count, &mut rng);
        prop_assert_eq!(variants.len(), count);
        for variant in &variants {
            prop_assert!(!variant.content.trim().is_empty());
            prop_assert!((0.0..=1.0).contains(&variant.degradation_level));
            prop_assert!((0.0..=1.0).contains(&variant.epistemic_distance));
        }
    }

    #[test]
    fn prop_seeded_generation_is_reproducible(
        context in context_strategy(),
        seed in any::<u64>(),
    ) {
        for set in [StrategySet::standard(), StrategySet::noise_models()] {
            let generator = VariantGenerator::new(set);
            let a = generator.generate(&context, 6, &mut StdRng::seed_from_u64(seed));
            let b = generator.generate(&context, 6, &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn prop_metrics_are_bounded(a in ".{0,200}", b in ".{0,200}") {
        prop_assert!((0.0..=1.0).contains(&degradation_level(&a, &b)));
        prop_assert!((0.0..=1.0).contains(&epistemic_distance(&a, &b)));
    }

    #[test]
    fn prop_self_distance_is_zero(a in ".{0,200}") {
        prop_assert_eq!(epistemic_distance(&a, &a), 0.0);
        prop_assert_eq!(degradation_level(&a, &a), 0.0);
    }
}
