//! # ccr-core
//!
//! Foundation crate for the epistemic-robust action router.
//! Defines all shared types, traits, errors, and config.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{CcrConfig, RouteOptions};
pub use errors::{CcrError, CcrResult, ConfigError, EpistemicModelError, OracleError};
pub use models::{
    Action, CellScore, Context, Decision, DeferReason, RobustnessAssessment, RouteOutcome,
    RouterState, RoutingResult, UncertaintySignal, Variant,
};
pub use traits::{
    Cancellable, CancellationToken, ICompletionClient, IScoringOracle, IUncertaintySource,
    IVariantStrategy, UncertaintyEvidence,
};
