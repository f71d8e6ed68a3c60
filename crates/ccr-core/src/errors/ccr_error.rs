use super::{ConfigError, EpistemicModelError, OracleError};

/// Top-level error for the router workspace.
///
/// Only precondition failures reach the caller of `route()`. Oracle failures
/// are recovered per cell and never surface through this type from a routing
/// call; the `Oracle` variant exists for adapters and belief routing.
#[derive(Debug, thiserror::Error)]
pub enum CcrError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("invalid router transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("oracle error: {0}")]
    Oracle(#[from] OracleError),

    #[error("epistemic model error: {0}")]
    EpistemicModel(#[from] EpistemicModelError),
}

impl CcrError {
    /// Shorthand for an `InvalidInput` error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

pub type CcrResult<T> = Result<T, CcrError>;
