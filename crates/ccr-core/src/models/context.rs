//! Context model: the situation a routing query is evaluated against.

use serde::{Deserialize, Serialize};

/// Immutable textual description of the situation under evaluation.
///
/// The router never mutates a caller's context; strategies produce new
/// `String`s derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context(String);

impl Context {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the context carries no informational content.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Number of whitespace-separated tokens.
    pub fn token_count(&self) -> usize {
        self.0.split_whitespace().count()
    }

    /// blake3 hex digest of the content, used in logs instead of the raw text.
    pub fn fingerprint(&self) -> String {
        blake3::hash(self.0.as_bytes()).to_hex().to_string()
    }
}

impl AsRef<str> for Context {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Context {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Context {
    fn from(text: String) -> Self {
        Self(text)
    }
}
