//! # ccr-router
//!
//! Routes a query to one of several candidate actions by scoring every
//! action against a set of perturbed "possible world" contexts, keeping the
//! action whose worst case holds up best, and deferring when the outcome is
//! too uncertain to commit.
//!
//! One `route()` call walks a fresh state machine:
//! `Init → GeneratingVariants → Scoring → Aggregating → Deciding → Selected | Deferred`,
//! with `Canceled` reachable from `Scoring`.

pub mod belief;
pub mod decide;
pub mod engine;
pub mod machine;
pub mod oracle;
pub mod scoring;

pub use belief::{generate_hypotheses, BeliefDecision, BeliefOutcome, BeliefRouter, BeliefScore};
pub use decide::decide;
pub use engine::Router;
pub use machine::RoutingMachine;
pub use oracle::{parse_score, FallbackOracle, PromptOracle};
pub use scoring::{ScoreMatrix, ScoringLimits, ScoringOutcome};
