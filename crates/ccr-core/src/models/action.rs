use serde::{Deserialize, Serialize};

/// A caller-supplied candidate decision.
///
/// Actions are only ever compared through their score vectors; `label` is
/// what the oracle sees.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// Stable identifier, unique within one routing call.
    pub id: String,
    /// Display text handed to the scoring oracle.
    pub label: String,
}

impl Action {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Build an action whose id is its label.
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            id: label.clone(),
            label,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}
