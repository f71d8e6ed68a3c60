//! Entropy measures.

/// Smoothing term inside the logarithm.
pub const LOG_EPSILON: f64 = 1e-9;

/// Shannon entropy (nats) of a score vector treated as an unnormalized
/// distribution.
///
/// Negative and NaN entries count as zero mass. An all-zero vector has
/// entropy 0. The result is floored at 0 so the smoothing term can never
/// make a certain distribution look negative.
pub fn distribution_entropy(values: &[f64]) -> f64 {
    let mass: Vec<f64> = values
        .iter()
        .map(|v| if *v > 0.0 && v.is_finite() { *v } else { 0.0 })
        .collect();
    let total: f64 = mass.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }

    let h: f64 = mass
        .iter()
        .map(|m| m / total)
        .map(|p| -p * (p + LOG_EPSILON).ln())
        .sum();
    h.max(0.0)
}

/// Binary entropy in bits. 0 at the endpoints (and outside (0, 1)), 1 at 0.5.
pub fn binary_entropy(p: f64) -> f64 {
    if !(p > 0.0 && p < 1.0) {
        return 0.0;
    }
    -(p * p.log2() + (1.0 - p) * (1.0 - p).log2())
}

/// `entropy / ln(n)`, clamped to [0, 1]. 0 when `n <= 1`.
pub fn normalized_entropy(entropy: f64, n: usize) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    (entropy / (n as f64).ln()).clamp(0.0, 1.0)
}
