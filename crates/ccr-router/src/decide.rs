//! Defer-or-select decision over a ranked aggregation.

use ccr_aggregation::Aggregation;
use ccr_core::models::{Decision, DeferReason, UncertaintySignal};

/// Fewest conclusive actions the router will choose between.
pub const MIN_CANDIDATES: usize = 2;

/// Decide from the ranking and its uncertainty signal.
///
/// Deferral reasons are checked in order: too few conclusive candidates,
/// entropy above `entropy_threshold`, then collapse. The first match wins.
pub fn decide(
    aggregation: &Aggregation,
    signal: &UncertaintySignal,
    entropy_threshold: f64,
) -> Decision {
    let conclusive = aggregation.ranked.len();
    if conclusive < MIN_CANDIDATES {
        return deferred(DeferReason::InsufficientCandidates { conclusive });
    }
    if signal.entropy > entropy_threshold {
        return deferred(DeferReason::HighEntropy {
            entropy: signal.entropy,
            threshold: entropy_threshold,
        });
    }
    if signal.collapse {
        return deferred(DeferReason::Collapse);
    }
    match aggregation.top() {
        Some(top) => Decision::Selected {
            action: top.action.clone(),
            robustness_score: top.robustness_score,
        },
        None => deferred(DeferReason::InsufficientCandidates { conclusive }),
    }
}

fn deferred(reason: DeferReason) -> Decision {
    Decision::Deferred { reason }
}
