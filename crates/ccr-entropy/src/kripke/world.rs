use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A possible world: a named assignment of truth values to propositions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    pub name: String,
    pub facts: BTreeMap<String, bool>,
}

impl World {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            facts: BTreeMap::new(),
        }
    }

    pub fn with_fact(mut self, proposition: impl Into<String>, value: bool) -> Self {
        self.facts.insert(proposition.into(), value);
        self
    }

    /// Unlisted propositions are false.
    pub fn holds(&self, proposition: &str) -> bool {
        self.facts.get(proposition).copied().unwrap_or(false)
    }
}
