//! Collapse: the top of a ranking cannot be told apart.

use ccr_core::config::{defaults, RouteOptions};
use serde::{Deserialize, Serialize};

/// Slack for floating-point noise in tolerance comparisons.
const TOLERANCE_SLACK: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollapseConfig {
    /// Scores this close (inclusive) count as tied.
    pub tolerance: f64,
    /// Both leaders must strictly exceed this for a top-two tie to collapse.
    pub confidence: f64,
}

impl Default for CollapseConfig {
    fn default() -> Self {
        Self {
            tolerance: defaults::DEFAULT_COLLAPSE_TOLERANCE,
            confidence: defaults::DEFAULT_COLLAPSE_CONFIDENCE,
        }
    }
}

impl From<&RouteOptions> for CollapseConfig {
    fn from(options: &RouteOptions) -> Self {
        Self {
            tolerance: options.collapse_tolerance,
            confidence: options.collapse_confidence,
        }
    }
}

/// True when the top two scores are tied and both highly confident, or when
/// every score is tied with every other. Fewer than two usable scores never
/// collapse. NaN entries are ignored.
pub fn collapse(scores: &[f64], config: &CollapseConfig) -> bool {
    let mut sorted: Vec<f64> = scores.iter().copied().filter(|s| !s.is_nan()).collect();
    if sorted.len() < 2 {
        return false;
    }
    sorted.sort_by(|a, b| b.total_cmp(a));

    let within = |a: f64, b: f64| (a - b).abs() <= config.tolerance + TOLERANCE_SLACK;

    let (top1, top2) = (sorted[0], sorted[1]);
    let confident_tie =
        within(top1, top2) && top1 > config.confidence && top2 > config.confidence;

    let spread_tie = within(sorted[0], sorted[sorted.len() - 1]);

    confident_tie || spread_tie
}
