use serde::{Deserialize, Serialize};

/// Uncertainty measured over a set of scores or a possible-worlds query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UncertaintySignal {
    /// Raw entropy (nats for distributions, bits for proportions).
    pub entropy: f64,
    /// Entropy divided by its maximum for the input size (0.0–1.0).
    pub normalized_entropy: f64,
    /// Top-of-ranking tie ambiguity.
    pub collapse: bool,
}

impl UncertaintySignal {
    /// A fully certain signal.
    pub fn certain() -> Self {
        Self {
            entropy: 0.0,
            normalized_entropy: 0.0,
            collapse: false,
        }
    }
}
