use serde::{Deserialize, Serialize};

/// Sub-agent best suited to a question, chosen by epistemic entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CognitiveModule {
    /// Entropy 0: the answer is known.
    Factual,
    /// Entropy below 0.5.
    Reasoning,
    /// Entropy below 0.9.
    Retrieval,
    /// Everything else.
    Exploratory,
}

impl CognitiveModule {
    pub fn for_entropy(entropy: f64) -> Self {
        if entropy == 0.0 {
            Self::Factual
        } else if entropy < 0.5 {
            Self::Reasoning
        } else if entropy < 0.9 {
            Self::Retrieval
        } else {
            Self::Exploratory
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Factual => "factual",
            Self::Reasoning => "reasoning",
            Self::Retrieval => "retrieval",
            Self::Exploratory => "exploratory",
        }
    }
}
