use serde::{Deserialize, Serialize};

use super::{Action, RobustnessAssessment, RouterState, Variant};

/// Why the router declined to commit to an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DeferReason {
    /// Zero variants were requested or produced.
    NoVariants,
    /// Fewer than two actions had any usable score.
    InsufficientCandidates { conclusive: usize },
    /// Entropy over the candidate robustness scores exceeded the threshold.
    HighEntropy { entropy: f64, threshold: f64 },
    /// The top of the ranking cannot be told apart.
    Collapse,
}

impl DeferReason {
    /// Stable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoVariants => "no_variants",
            Self::InsufficientCandidates { .. } => "insufficient_candidates",
            Self::HighEntropy { .. } => "high_entropy",
            Self::Collapse => "collapse",
        }
    }
}

impl std::fmt::Display for DeferReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// The router's verdict for a completed routing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Decision {
    Selected {
        action: Action,
        robustness_score: f64,
    },
    Deferred {
        reason: DeferReason,
    },
}

/// Immutable result of a routing call that ran to a decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingResult {
    pub decision: Decision,
    /// Entropy (nats) over the conclusive robustness scores.
    pub entropy: f64,
    /// `entropy / ln(n)` for n conclusive actions.
    pub normalized_entropy: f64,
    /// Collapse signal over the ranked robustness scores.
    pub collapse: bool,
    /// Conclusive assessments, best first.
    pub per_action: Vec<RobustnessAssessment>,
    /// Actions excluded because no variant produced a usable score.
    pub inconclusive: Vec<Action>,
    /// The variants the actions were scored against.
    pub variants: Vec<Variant>,
    /// Router states visited, in order.
    pub trail: Vec<RouterState>,
    /// blake3 digest of the original context.
    pub context_fingerprint: String,
}

impl RoutingResult {
    pub fn selected_action(&self) -> Option<&Action> {
        match &self.decision {
            Decision::Selected { action, .. } => Some(action),
            Decision::Deferred { .. } => None,
        }
    }

    pub fn defer_reason(&self) -> Option<&DeferReason> {
        match &self.decision {
            Decision::Deferred { reason } => Some(reason),
            Decision::Selected { .. } => None,
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self.decision, Decision::Deferred { .. })
    }

    /// Assessment for the action with the given id.
    pub fn assessment(&self, action_id: &str) -> Option<&RobustnessAssessment> {
        self.per_action.iter().find(|a| a.action.id == action_id)
    }
}

/// Terminal outcome of `route()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "result", rename_all = "snake_case")]
pub enum RouteOutcome {
    /// The machine reached `Selected` or `Deferred`.
    Routed(RoutingResult),
    /// Cancellation was observed while scoring. No partial result.
    Canceled,
}

impl RouteOutcome {
    pub fn result(&self) -> Option<&RoutingResult> {
        match self {
            Self::Routed(result) => Some(result),
            Self::Canceled => None,
        }
    }

    pub fn into_result(self) -> Option<RoutingResult> {
        match self {
            Self::Routed(result) => Some(result),
            Self::Canceled => None,
        }
    }

    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::Canceled)
    }

    pub fn selected_action(&self) -> Option<&Action> {
        self.result().and_then(RoutingResult::selected_action)
    }
}
