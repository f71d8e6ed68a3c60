//! In-process routing metrics.

use std::collections::BTreeMap;

use ccr_core::models::{Decision, RouteOutcome};
use serde::Serialize;

/// Counters over routing outcomes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoutingMetrics {
    pub total_routes: u64,
    pub selected: u64,
    pub deferred: u64,
    pub canceled: u64,
    /// Deferrals keyed by reason code.
    pub defer_reasons: BTreeMap<String, u64>,
    /// (action, variant) cells that produced no usable score.
    pub unavailable_cells: u64,
    pub inconclusive_actions: u64,
    entropy_sum: f64,
    entropy_samples: u64,
}

impl RoutingMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one `route()` call.
    pub fn record(&mut self, outcome: &RouteOutcome) {
        self.total_routes += 1;
        let result = match outcome {
            RouteOutcome::Canceled => {
                self.canceled += 1;
                return;
            }
            RouteOutcome::Routed(result) => result,
        };

        match &result.decision {
            Decision::Selected { .. } => self.selected += 1,
            Decision::Deferred { reason } => {
                self.deferred += 1;
                *self
                    .defer_reasons
                    .entry(reason.code().to_string())
                    .or_insert(0) += 1;
            }
        }

        let variants = result.variants.len() as u64;
        let partial: u64 = result
            .per_action
            .iter()
            .map(|a| a.unavailable_variants as u64)
            .sum();
        let inconclusive = result.inconclusive.len() as u64;
        self.unavailable_cells += partial + inconclusive * variants;
        self.inconclusive_actions += inconclusive;

        self.entropy_sum += result.entropy;
        self.entropy_samples += 1;
    }

    /// Mean entropy over routed (non-canceled) calls.
    pub fn mean_entropy(&self) -> f64 {
        if self.entropy_samples == 0 {
            return 0.0;
        }
        self.entropy_sum / self.entropy_samples as f64
    }

    /// Fraction of routed calls that deferred.
    pub fn defer_rate(&self) -> f64 {
        let routed = self.selected + self.deferred;
        if routed == 0 {
            return 0.0;
        }
        self.deferred as f64 / routed as f64
    }

    /// Reset all metrics.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
