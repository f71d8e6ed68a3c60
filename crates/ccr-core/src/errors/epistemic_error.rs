/// Possible-worlds model errors.
#[derive(Debug, thiserror::Error)]
pub enum EpistemicModelError {
    #[error("unknown agent: {agent}")]
    UnknownAgent { agent: String },

    #[error("unknown world: {world}")]
    UnknownWorld { world: String },

    #[error("accessibility relation of {agent} references missing world {world}")]
    DanglingAccessibility { agent: String, world: String },
}
