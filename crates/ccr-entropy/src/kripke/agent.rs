use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An agent's accessibility relation: from each world, the ordered list of
/// worlds it cannot rule out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpistemicAgent {
    pub name: String,
    pub accessible: BTreeMap<String, Vec<String>>,
}

impl EpistemicAgent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accessible: BTreeMap::new(),
        }
    }

    pub fn set_accessible<I, S>(&mut self, world: impl Into<String>, reachable: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accessible
            .insert(world.into(), reachable.into_iter().map(Into::into).collect());
    }

    /// Builder form of [`set_accessible`](Self::set_accessible).
    pub fn with_accessible<I, S>(mut self, world: impl Into<String>, reachable: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_accessible(world, reachable);
        self
    }

    /// Worlds accessible from `world`; empty when none were declared.
    pub fn alternatives(&self, world: &str) -> &[String] {
        self.accessible.get(world).map(Vec::as_slice).unwrap_or(&[])
    }
}
