//! Span definitions per routing phase.

/// Span wrapping one `route()` call. Only the context fingerprint is
/// recorded, never the raw context.
#[macro_export]
macro_rules! route_span {
    ($fingerprint:expr, $actions:expr, $variants:expr) => {
        tracing::info_span!(
            "ccr.route",
            context = %$fingerprint,
            actions = $actions,
            variants = $variants
        )
    };
}

/// Span wrapping the concurrent scoring phase.
#[macro_export]
macro_rules! scoring_span {
    ($oracle:expr, $cells:expr) => {
        tracing::info_span!("ccr.scoring", oracle = %$oracle, cells = $cells)
    };
}

/// Span wrapping a belief-routing call.
#[macro_export]
macro_rules! belief_span {
    ($hypotheses:expr) => {
        tracing::info_span!("ccr.belief", hypotheses = $hypotheses)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ROUTE: &str = "ccr.route";
    pub const SCORING: &str = "ccr.scoring";
    pub const BELIEF: &str = "ccr.belief";
}
