//! # ccr-variants
//!
//! Builds the "possible worlds" an action is scored against: pure text
//! strategies, an ordered strategy set, and the generator that applies them
//! and annotates each variant with degradation and epistemic distance.

pub mod generator;
pub mod metrics;
pub mod segmenter;
pub mod strategies;
pub mod strategy_set;

pub use generator::VariantGenerator;
pub use strategy_set::StrategySet;
