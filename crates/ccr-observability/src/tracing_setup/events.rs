//! Structured log events for routing.
//!
//! Each function emits a `tracing` event with structured fields.

use ccr_core::models::{DeferReason, RouterState};

/// Log a state machine transition.
pub fn state_transition(from: RouterState, to: RouterState) {
    tracing::debug!(
        event = "state_transition",
        from = %from,
        to = %to,
        "router state transition"
    );
}

/// Log the variants produced for a call.
pub fn variants_generated(count: usize, strategies: &[&str]) {
    tracing::debug!(
        event = "variants_generated",
        count = count,
        strategies = ?strategies,
        "variants generated"
    );
}

/// Log a cell the oracle could not score.
pub fn cell_unavailable(action_id: &str, variant_id: &str, reason: &str) {
    tracing::warn!(
        event = "cell_unavailable",
        action = %action_id,
        variant = %variant_id,
        reason = %reason,
        "oracle score unavailable"
    );
}

/// Log the whole-call deadline cutting off outstanding cells.
pub fn scoring_deadline_exceeded(outstanding: usize, deadline_ms: u64) {
    tracing::warn!(
        event = "scoring_deadline_exceeded",
        outstanding = outstanding,
        deadline_ms = deadline_ms,
        "scoring deadline exceeded, outstanding cells marked unavailable"
    );
}

/// Log an action excluded from ranking.
pub fn action_inconclusive(action_id: &str) {
    tracing::warn!(
        event = "action_inconclusive",
        action = %action_id,
        "action inconclusive"
    );
}

/// Log a selection.
pub fn action_selected(action_id: &str, robustness: f64, entropy: f64) {
    tracing::info!(
        event = "action_selected",
        action = %action_id,
        robustness = robustness,
        entropy = entropy,
        "action selected"
    );
}

/// Log a deferral.
pub fn route_deferred(reason: &DeferReason, entropy: f64, collapse: bool) {
    tracing::info!(
        event = "route_deferred",
        reason = %reason,
        entropy = entropy,
        collapse = collapse,
        "routing deferred"
    );
}

/// Log a cancellation observed during scoring.
pub fn route_canceled(completed_cells: usize, total_cells: usize) {
    tracing::info!(
        event = "route_canceled",
        completed = completed_cells,
        total = total_cells,
        "routing canceled"
    );
}

/// Log a primary oracle failure absorbed by a fallback.
pub fn oracle_degraded(primary: &str, fallback: &str, failure: &str) {
    tracing::warn!(
        event = "oracle_degraded",
        primary = %primary,
        fallback = %fallback,
        failure = %failure,
        "oracle degraded to fallback"
    );
}
