//! Scripted oracles for router tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use ccr_core::errors::OracleError;
use ccr_core::models::Action;
use ccr_core::traits::IScoringOracle;

use crate::scenario::RoutingScenario;
use crate::worlds::world_index;

/// Replays a fixed score matrix keyed by action id and world tag.
#[derive(Debug, Default)]
pub struct ScriptedOracle {
    scores: BTreeMap<String, Vec<Option<f64>>>,
    calls: AtomicUsize,
}

impl ScriptedOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores for one action, one entry per world. `None` is unavailable.
    pub fn with_row(mut self, action_id: &str, row: &[Option<f64>]) -> Self {
        self.scores.insert(action_id.to_string(), row.to_vec());
        self
    }

    /// Shorthand for a fully available row.
    pub fn with_scores(self, action_id: &str, row: &[f64]) -> Self {
        let row: Vec<Option<f64>> = row.iter().copied().map(Some).collect();
        self.with_row(action_id, &row)
    }

    pub fn from_scenario(scenario: &RoutingScenario) -> Self {
        Self {
            scores: scenario.scores.clone(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn lookup(&self, context: &str, action: &Action) -> Result<f64, OracleError> {
        let world = world_index(context).ok_or_else(|| OracleError::MalformedOutput {
            raw: "variant carries no world tag".to_string(),
        })?;
        self.scores
            .get(&action.id)
            .and_then(|row| row.get(world).copied().flatten())
            .ok_or_else(|| OracleError::unavailable(format!("no score for {} in world {world}", action.id)))
    }
}

impl IScoringOracle for ScriptedOracle {
    async fn score(&self, _query: &str, context: &str, action: &Action) -> Result<f64, OracleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.lookup(context, action)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Same score for every cell.
#[derive(Debug, Clone, Copy)]
pub struct ConstantOracle(pub f64);

impl IScoringOracle for ConstantOracle {
    async fn score(&self, _query: &str, _context: &str, _action: &Action) -> Result<f64, OracleError> {
        Ok(self.0)
    }

    fn name(&self) -> &str {
        "constant"
    }
}

/// Always fails.
#[derive(Debug, Clone, Default)]
pub struct FailingOracle;

impl IScoringOracle for FailingOracle {
    async fn score(&self, _query: &str, _context: &str, _action: &Action) -> Result<f64, OracleError> {
        Err(OracleError::unavailable("provider down"))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Sleeps before answering; per-action delays override the default.
#[derive(Debug, Clone)]
pub struct SlowOracle {
    default_delay: Duration,
    delays: BTreeMap<String, Duration>,
    score: f64,
}

impl SlowOracle {
    pub fn new(default_delay: Duration, score: f64) -> Self {
        Self {
            default_delay,
            delays: BTreeMap::new(),
            score,
        }
    }

    pub fn with_delay(mut self, action_id: &str, delay: Duration) -> Self {
        self.delays.insert(action_id.to_string(), delay);
        self
    }
}

impl IScoringOracle for SlowOracle {
    async fn score(&self, _query: &str, _context: &str, action: &Action) -> Result<f64, OracleError> {
        let delay = self.delays.get(&action.id).copied().unwrap_or(self.default_delay);
        tokio::time::sleep(delay).await;
        Ok(self.score)
    }

    fn name(&self) -> &str {
        "slow"
    }
}

/// Never answers.
#[derive(Debug, Clone, Default)]
pub struct PendingOracle;

impl IScoringOracle for PendingOracle {
    async fn score(&self, _query: &str, _context: &str, _action: &Action) -> Result<f64, OracleError> {
        std::future::pending().await
    }

    fn name(&self) -> &str {
        "pending"
    }
}

/// Panics when asked about `action_id`, otherwise returns `score`.
#[derive(Debug, Clone)]
pub struct PanickingOracle {
    pub action_id: String,
    pub score: f64,
}

impl IScoringOracle for PanickingOracle {
    async fn score(&self, _query: &str, _context: &str, action: &Action) -> Result<f64, OracleError> {
        if action.id == self.action_id {
            panic!("oracle exploded on {}", action.id);
        }
        Ok(self.score)
    }

    fn name(&self) -> &str {
        "panicking"
    }
}
