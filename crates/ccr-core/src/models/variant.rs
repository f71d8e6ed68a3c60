use serde::{Deserialize, Serialize};

/// One "possible world": a transformed copy of the routing context.
///
/// Produced once per routing call and never reused across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// `V1`, `V2`, ... in generation order.
    pub id: String,
    /// Name of the strategy that produced this variant.
    pub strategy: String,
    /// The transformed context.
    pub content: String,
    /// Relative token-count change against the original (0.0–1.0).
    pub degradation_level: f64,
    /// 1 − Jaccard similarity of the leading token sets (0.0–1.0).
    pub epistemic_distance: f64,
}

impl Variant {
    /// Variant id for the zero-based generation index.
    pub fn id_for(index: usize) -> String {
        format!("V{}", index + 1)
    }
}
