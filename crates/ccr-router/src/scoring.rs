//! Concurrent scoring of the (action × variant) matrix.
//!
//! Every cell is an independent task on a `JoinSet`. Results land at their
//! cell index, so the matrix does not depend on completion order.

use std::sync::Arc;
use std::time::Duration;

use ccr_core::config::RouteOptions;
use ccr_core::errors::OracleError;
use ccr_core::models::{Action, CellScore, Variant};
use ccr_core::traits::{CancellationToken, Cancellable, IScoringOracle};
use ccr_observability::scoring_span;
use ccr_observability::tracing_setup::events;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{warn, Instrument};

/// Reason recorded for cells still outstanding when the deadline fires.
const DEADLINE_REASON: &str = "scoring deadline exceeded";
/// Reason recorded for cells whose task died without reporting.
const ABORTED_REASON: &str = "oracle task aborted";

/// Time and concurrency bounds for one scoring phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringLimits {
    pub per_call_timeout: Duration,
    pub whole_call_timeout: Duration,
    /// `None` is unbounded.
    pub max_concurrency: Option<usize>,
}

impl From<&RouteOptions> for ScoringLimits {
    fn from(options: &RouteOptions) -> Self {
        Self {
            per_call_timeout: options.per_call_timeout,
            whole_call_timeout: options.whole_call_timeout,
            max_concurrency: options.max_concurrency,
        }
    }
}

/// Scored cells, one row per action and one column per variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    rows: Vec<Vec<CellScore>>,
}

impl ScoreMatrix {
    pub fn rows(&self) -> &[Vec<CellScore>] {
        &self.rows
    }

    pub fn cell(&self, action: usize, variant: usize) -> Option<&CellScore> {
        self.rows.get(action).and_then(|row| row.get(variant))
    }

    pub fn unavailable_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| !cell.is_available())
            .count()
    }
}

/// How the scoring phase ended.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringOutcome {
    /// Every cell is scored or unavailable.
    Completed(ScoreMatrix),
    /// Cancellation was observed; outstanding calls were aborted.
    Canceled,
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Score every action against every variant.
///
/// A failing, slow, non-finite or panicking cell becomes
/// `CellScore::Unavailable`; only cancellation ends the phase without a matrix.
pub async fn score_matrix<O>(
    oracle: Arc<O>,
    query: &str,
    actions: &[Action],
    variants: &[Variant],
    limits: ScoringLimits,
    cancel: &CancellationToken,
) -> ScoringOutcome
where
    O: IScoringOracle + 'static,
{
    let width = variants.len();
    let total = actions.len() * width;
    let span = scoring_span!(oracle.name(), total);

    async move {
        if cancel.is_cancelled() {
            events::route_canceled(0, total);
            return ScoringOutcome::Canceled;
        }

        let query: Arc<str> = Arc::from(query);
        let contents: Vec<Arc<str>> = variants
            .iter()
            .map(|v| Arc::from(v.content.as_str()))
            .collect();
        let semaphore = limits
            .max_concurrency
            .map(|permits| Arc::new(Semaphore::new(permits)));

        let mut tasks = JoinSet::new();
        for (a, action) in actions.iter().enumerate() {
            for (v, content) in contents.iter().enumerate() {
                let index = a * width + v;
                let oracle = Arc::clone(&oracle);
                let query = Arc::clone(&query);
                let content = Arc::clone(content);
                let action = action.clone();
                let semaphore = semaphore.clone();
                let per_call = limits.per_call_timeout;

                tasks.spawn(async move {
                    // Held until the oracle call returns.
                    let _permit = match semaphore {
                        Some(semaphore) => match semaphore.acquire_owned().await {
                            Ok(permit) => Some(permit),
                            Err(_) => {
                                return (index, CellScore::unavailable("scoring semaphore closed"))
                            }
                        },
                        None => None,
                    };
                    let result =
                        match tokio::time::timeout(per_call, oracle.score(&query, &content, &action))
                            .await
                        {
                            Ok(result) => result,
                            Err(_) => Err(OracleError::Timeout {
                                elapsed_ms: millis(per_call),
                            }),
                        };
                    (index, CellScore::from_oracle(result))
                });
            }
        }

        let mut cells: Vec<Option<CellScore>> = vec![None; total];
        let mut completed = 0usize;
        let mut fallback_reason = ABORTED_REASON;
        let deadline = Instant::now() + limits.whole_call_timeout;

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tasks.abort_all();
                    events::route_canceled(completed, total);
                    return ScoringOutcome::Canceled;
                }
                joined = tokio::time::timeout_at(deadline, tasks.join_next()) => match joined {
                    Ok(Some(Ok((index, cell)))) => {
                        cells[index] = Some(cell);
                        completed += 1;
                    }
                    Ok(Some(Err(e))) => {
                        warn!(error = %e, panicked = e.is_panic(), "oracle task failed");
                    }
                    Ok(None) => break,
                    Err(_) => {
                        events::scoring_deadline_exceeded(tasks.len(), millis(limits.whole_call_timeout));
                        tasks.abort_all();
                        fallback_reason = DEADLINE_REASON;
                        break;
                    }
                },
            }
        }

        let mut rows: Vec<Vec<CellScore>> = Vec::with_capacity(actions.len());
        let mut cells = cells.into_iter();
        for action in actions {
            let row: Vec<CellScore> = variants
                .iter()
                .map(|variant| {
                    let cell = cells
                        .next()
                        .flatten()
                        .unwrap_or_else(|| CellScore::unavailable(fallback_reason));
                    if let CellScore::Unavailable { reason } = &cell {
                        events::cell_unavailable(&action.id, &variant.id, reason);
                    }
                    cell
                })
                .collect();
            rows.push(row);
        }

        ScoringOutcome::Completed(ScoreMatrix { rows })
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoOracle;

    impl IScoringOracle for EchoOracle {
        async fn score(&self, _q: &str, context: &str, action: &Action) -> Result<f64, OracleError> {
            if action.id == "broken" {
                return Err(OracleError::unavailable("no"));
            }
            Ok(context.len() as f64 / 100.0)
        }

        fn name(&self) -> &str {
            "echo"
        }
    }

    fn variant(i: usize, content: &str) -> Variant {
        Variant {
            id: Variant::id_for(i),
            strategy: "identity".into(),
            content: content.into(),
            degradation_level: 0.0,
            epistemic_distance: 0.0,
        }
    }

    fn limits() -> ScoringLimits {
        ScoringLimits::from(&RouteOptions::default())
    }

    #[tokio::test]
    async fn cells_land_at_their_index() {
        let actions = vec![Action::from_label("a"), Action::from_label("broken")];
        let variants = vec![variant(0, "x"), variant(1, "xxxxxxxxxx")];
        let outcome = score_matrix(
            Arc::new(EchoOracle),
            "q",
            &actions,
            &variants,
            limits(),
            &CancellationToken::new(),
        )
        .await;

        let ScoringOutcome::Completed(matrix) = outcome else {
            panic!("expected a matrix");
        };
        assert_eq!(matrix.cell(0, 0).and_then(CellScore::value), Some(0.01));
        assert_eq!(matrix.cell(0, 1).and_then(CellScore::value), Some(0.1));
        assert!(!matrix.cell(1, 0).unwrap().is_available());
        assert_eq!(matrix.unavailable_count(), 2);
    }

    #[tokio::test]
    async fn already_cancelled_token_spawns_nothing() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let outcome = score_matrix(
            Arc::new(EchoOracle),
            "q",
            &[Action::from_label("a")],
            &[variant(0, "x")],
            limits(),
            &cancel,
        )
        .await;
        assert_eq!(outcome, ScoringOutcome::Canceled);
    }
}
