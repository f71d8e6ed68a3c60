use crate::errors::CcrResult;

/// Raw material an uncertainty source hands to the entropy evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum UncertaintyEvidence {
    /// Competing, non-negative belief or robustness scores.
    Distribution(Vec<f64>),
    /// Fraction of accessible worlds (or variants) satisfying a proposition.
    /// `None` when there is nothing to count, which reads as maximal uncertainty.
    Proportion(Option<f64>),
}

/// Anything that can describe its own uncertainty.
///
/// Score sets and possible-worlds queries both implement this, so the
/// entropy evaluator does not care which formalization produced the signal.
pub trait IUncertaintySource {
    fn evidence(&self) -> CcrResult<UncertaintyEvidence>;
}

impl IUncertaintySource for [f64] {
    fn evidence(&self) -> CcrResult<UncertaintyEvidence> {
        Ok(UncertaintyEvidence::Distribution(self.to_vec()))
    }
}

impl IUncertaintySource for Vec<f64> {
    fn evidence(&self) -> CcrResult<UncertaintyEvidence> {
        Ok(UncertaintyEvidence::Distribution(self.clone()))
    }
}
