use std::future::Future;

use crate::errors::OracleError;
use crate::models::Action;

/// Plausibility scorer consumed by the router.
///
/// Implementations are constructed by the caller and injected into the
/// router; the core never reaches for a shared client. Any error is treated
/// as "unavailable" for that one cell.
pub trait IScoringOracle: Send + Sync {
    /// Plausibility in [0, 1] of `action` answering `query` under `context`.
    fn score(
        &self,
        query: &str,
        context: &str,
        action: &Action,
    ) -> impl Future<Output = Result<f64, OracleError>> + Send;

    /// Score several actions against one context, aligned with `actions`.
    fn score_batch(
        &self,
        query: &str,
        context: &str,
        actions: &[Action],
    ) -> impl Future<Output = Vec<Result<f64, OracleError>>> + Send {
        async move {
            let mut scores = Vec::with_capacity(actions.len());
            for action in actions {
                scores.push(self.score(query, context, action).await);
            }
            scores
        }
    }

    /// Human-readable oracle name.
    fn name(&self) -> &str;
}
