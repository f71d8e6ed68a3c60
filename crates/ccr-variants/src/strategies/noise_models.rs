//! Noise models: clean access, missing tokens, noisy numbers.

use std::sync::LazyLock;

use ccr_core::config::defaults;
use ccr_core::traits::IVariantStrategy;
use rand::{Rng, RngCore};
use regex::{Captures, Regex};

static INTEGER: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\d+").ok());

/// Full epistemic access: returns the context unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Identity {
    pub const NAME: &'static str = "identity";
}

impl IVariantStrategy for Identity {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn apply(&self, context: &str, _rng: &mut dyn RngCore) -> Option<String> {
        Some(context.to_string())
    }
}

/// Drops each whitespace token independently with `probability`.
/// Never empties the text: if every token would go, the original is kept.
#[derive(Debug, Clone, Copy)]
pub struct TokenDrop {
    probability: f64,
}

impl TokenDrop {
    pub const NAME: &'static str = "token_drop";

    pub fn new(probability: f64) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
        }
    }
}

impl Default for TokenDrop {
    fn default() -> Self {
        Self::new(defaults::DEFAULT_TOKEN_DROP_PROBABILITY)
    }
}

impl IVariantStrategy for TokenDrop {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn apply(&self, context: &str, rng: &mut dyn RngCore) -> Option<String> {
        let kept: Vec<&str> = context
            .split_whitespace()
            .filter(|_| rng.gen::<f64>() >= self.probability)
            .collect();
        if kept.is_empty() {
            return Some(context.to_string());
        }
        Some(kept.join(" "))
    }
}

/// Shifts every integer by a uniform offset in `[-range, range]`.
#[derive(Debug, Clone, Copy)]
pub struct NumericPerturb {
    range: i64,
}

impl NumericPerturb {
    pub const NAME: &'static str = "numeric_perturb";

    pub fn new(range: i64) -> Self {
        Self {
            range: range.saturating_abs(),
        }
    }
}

impl Default for NumericPerturb {
    fn default() -> Self {
        Self::new(defaults::DEFAULT_NUMERIC_PERTURB_RANGE)
    }
}

impl IVariantStrategy for NumericPerturb {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn apply(&self, context: &str, rng: &mut dyn RngCore) -> Option<String> {
        let regex = INTEGER.as_ref()?;
        let range = self.range;
        let perturbed = regex.replace_all(context, |caps: &Captures| {
            let digits = &caps[0];
            match digits.parse::<i64>() {
                Ok(n) => n.saturating_add(rng.gen_range(-range..=range)).to_string(),
                Err(_) => digits.to_string(),
            }
        });
        Some(perturbed.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn identity_is_identity() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(Identity.apply("abc 12", &mut rng).as_deref(), Some("abc 12"));
    }

    #[test]
    fn token_drop_never_empties_text() {
        let mut rng = StdRng::seed_from_u64(9);
        let out = TokenDrop::new(1.0).apply("every word goes", &mut rng).unwrap();
        assert_eq!(out, "every word goes");
    }

    #[test]
    fn token_drop_zero_probability_keeps_everything() {
        let mut rng = StdRng::seed_from_u64(9);
        let out = TokenDrop::new(0.0).apply("a  b c", &mut rng).unwrap();
        assert_eq!(out, "a b c");
    }

    #[test]
    fn numeric_perturb_stays_within_range() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..50 {
            let out = NumericPerturb::new(2).apply("load 100", &mut rng).unwrap();
            let n: i64 = out.trim_start_matches("load ").parse().unwrap();
            assert!((98..=102).contains(&n), "got {n}");
        }
    }

    #[test]
    fn numeric_perturb_leaves_text_without_numbers() {
        let mut rng = StdRng::seed_from_u64(4);
        let out = NumericPerturb::default().apply("no digits here", &mut rng).unwrap();
        assert_eq!(out, "no digits here");
    }

    #[test]
    fn numeric_perturb_accepts_the_most_negative_range() {
        let mut rng = StdRng::seed_from_u64(4);
        let strategy = NumericPerturb::new(i64::MIN);
        assert_eq!(strategy.range, i64::MAX);
        let out = strategy.apply("load 100", &mut rng).unwrap();
        assert!(out.trim_start_matches("load ").parse::<i64>().is_ok(), "got {out}");
    }

    #[test]
    fn numeric_perturb_zero_range_is_identity() {
        let mut rng = StdRng::seed_from_u64(4);
        let out = NumericPerturb::new(0).apply("v 7 and 42", &mut rng).unwrap();
        assert_eq!(out, "v 7 and 42");
    }
}
