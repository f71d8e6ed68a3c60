//! # ccr-aggregation
//!
//! Combines each action's per-variant scores into a worst-case robustness
//! score, ranks actions, and reports how sensitive they are to the variants.

pub mod aggregator;
pub mod evaluation;
pub mod ranking;
pub mod robust;
pub mod sensitivity;

pub use aggregator::{Aggregation, RobustAggregator};
pub use ranking::rank;
pub use robust::{aggregate, robustness_score, ScoreStats};
pub use sensitivity::{ActionSensitivity, SensitivityReport};
