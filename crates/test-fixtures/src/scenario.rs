//! Golden routing scenario format.

use std::collections::BTreeMap;

use ccr_core::models::Action;
use serde::Deserialize;

/// One end-to-end routing case: per-action, per-variant scores and the
/// decision they must produce. A `null` score is an unavailable cell.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutingScenario {
    pub name: String,
    pub description: String,
    pub query: String,
    pub context: String,
    /// Action labels in input order; ids equal labels.
    pub actions: Vec<String>,
    pub scores: BTreeMap<String, Vec<Option<f64>>>,
    pub expected: ExpectedRouting,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedRouting {
    /// `"selected"` or `"deferred"`.
    pub decision: String,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    pub entropy: f64,
    pub collapse: bool,
    /// Conclusive action ids, best first.
    pub ranking: Vec<String>,
    #[serde(default)]
    pub inconclusive: Vec<String>,
}

impl RoutingScenario {
    pub fn actions(&self) -> Vec<Action> {
        self.actions.iter().map(|l| Action::from_label(l.as_str())).collect()
    }

    /// Width of the score matrix.
    pub fn variant_count(&self) -> usize {
        self.scores.values().map(Vec::len).max().unwrap_or(0)
    }
}
