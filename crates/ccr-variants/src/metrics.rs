//! Per-variant metadata: how much a variant departs from the original.

use std::collections::HashSet;

/// Leading tokens compared by [`epistemic_distance`].
pub const DISTANCE_TOKEN_WINDOW: usize = 50;

/// Relative change in whitespace-token count, clamped to [0, 1].
/// A zero-length original has degradation 0.
pub fn degradation_level(original: &str, variant: &str) -> f64 {
    let orig_len = original.split_whitespace().count();
    if orig_len == 0 {
        return 0.0;
    }
    let var_len = variant.split_whitespace().count();
    (orig_len.abs_diff(var_len) as f64 / orig_len as f64).min(1.0)
}

/// `1 − Jaccard` over the lowercase token sets of the first
/// [`DISTANCE_TOKEN_WINDOW`] tokens of each side.
///
/// An empty original has distance 0; disjoint non-empty texts have distance 1.
pub fn epistemic_distance(original: &str, variant: &str) -> f64 {
    let orig = leading_tokens(original);
    if orig.is_empty() {
        return 0.0;
    }
    let var = leading_tokens(variant);
    let intersection = orig.intersection(&var).count();
    let union = orig.union(&var).count();
    (1.0 - intersection as f64 / union as f64).clamp(0.0, 1.0)
}

fn leading_tokens(text: &str) -> HashSet<String> {
    text.split_whitespace()
        .take(DISTANCE_TOKEN_WINDOW)
        .map(str::to_lowercase)
        .collect()
}
