/// Scoring oracle failures.
///
/// The router treats every variant identically: the cell becomes
/// `CellScore::Unavailable` and the reason is kept for diagnostics.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OracleError {
    #[error("oracle unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("oracle call timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },

    #[error("malformed oracle output: {raw}")]
    MalformedOutput { raw: String },
}

impl OracleError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}
