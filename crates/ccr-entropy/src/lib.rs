//! # ccr-entropy
//!
//! Uncertainty measures for the router: distribution and binary entropy, the
//! collapse signal, and a possible-worlds (Kripke) model that reports its
//! uncertainty through the same `IUncertaintySource` interface as score sets.

pub mod collapse;
pub mod evaluator;
pub mod kripke;
pub mod measures;

pub use collapse::{collapse, CollapseConfig};
pub use evaluator::EntropyEvaluator;
pub use measures::{binary_entropy, distribution_entropy, normalized_entropy};
