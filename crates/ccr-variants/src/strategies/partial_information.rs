use ccr_core::traits::IVariantStrategy;
use rand::seq::index;
use rand::RngCore;

use crate::segmenter::split_segments;

/// Fewer segments than this are returned unchanged.
const MIN_SEGMENTS: usize = 3;

/// Drops ⌈n/3⌉ randomly chosen sentence-like segments, keeping order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialInformation;

impl PartialInformation {
    pub const NAME: &'static str = "partial_information";
}

impl IVariantStrategy for PartialInformation {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn apply(&self, context: &str, rng: &mut dyn RngCore) -> Option<String> {
        let segments = split_segments(context);
        let n = segments.len();
        if n < MIN_SEGMENTS {
            return Some(context.to_string());
        }

        let to_drop = n.div_ceil(3);
        let mut dropped = vec![false; n];
        for i in index::sample(rng, n, to_drop).iter() {
            dropped[i] = true;
        }

        let kept: Vec<&str> = segments
            .iter()
            .zip(dropped)
            .filter(|(_, drop)| !drop)
            .map(|(segment, _)| segment.as_str())
            .collect();
        Some(kept.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn short_context_is_unchanged() {
        let mut rng = StdRng::seed_from_u64(1);
        let text = "Only one. And two.";
        assert_eq!(PartialInformation.apply(text, &mut rng).as_deref(), Some(text));
    }

    #[test]
    fn drops_a_third_rounded_up() {
        let mut rng = StdRng::seed_from_u64(7);
        let text = "S1 a. S2 b. S3 c. S4 d.";
        let out = PartialInformation.apply(text, &mut rng).unwrap();
        // ⌈4/3⌉ = 2 segments dropped.
        assert_eq!(split_segments(&out).len(), 2);
    }

    #[test]
    fn preserves_segment_order() {
        let mut rng = StdRng::seed_from_u64(3);
        let text = "A1. B2. C3. D4. E5. F6.";
        let out = PartialInformation.apply(text, &mut rng).unwrap();
        let kept = split_segments(&out);
        let mut sorted = kept.clone();
        sorted.sort();
        assert_eq!(kept, sorted);
        assert_eq!(kept.len(), 4);
    }
}
