//! Router lifecycle states.
//!
//! Valid transitions:
//! - Init → GeneratingVariants
//! - GeneratingVariants → Scoring
//! - GeneratingVariants → Deferred (no variants)
//! - Scoring → Aggregating
//! - Scoring → Canceled
//! - Aggregating → Deciding
//! - Deciding → Selected | Deferred
//!
//! Terminal states accept no transition and no state is revisited.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouterState {
    Init,
    GeneratingVariants,
    Scoring,
    Aggregating,
    Deciding,
    Selected,
    Deferred,
    Canceled,
}

impl RouterState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::GeneratingVariants => "generating_variants",
            Self::Scoring => "scoring",
            Self::Aggregating => "aggregating",
            Self::Deciding => "deciding",
            Self::Selected => "selected",
            Self::Deferred => "deferred",
            Self::Canceled => "canceled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Selected | Self::Deferred | Self::Canceled)
    }

    /// Whether `next` is a legal successor of `self`.
    pub fn can_transition_to(&self, next: RouterState) -> bool {
        use RouterState::*;
        matches!(
            (self, next),
            (Init, GeneratingVariants)
                | (GeneratingVariants, Scoring)
                | (GeneratingVariants, Deferred)
                | (Scoring, Aggregating)
                | (Scoring, Canceled)
                | (Aggregating, Deciding)
                | (Deciding, Selected)
                | (Deciding, Deferred)
        )
    }
}

impl std::fmt::Display for RouterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
