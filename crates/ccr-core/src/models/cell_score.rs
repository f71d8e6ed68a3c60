use serde::{Deserialize, Serialize};

use crate::errors::OracleError;

/// Outcome of scoring one (action, variant) cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CellScore {
    /// Plausibility in [0, 1].
    Scored { value: f64 },
    /// The oracle failed, timed out, or the call was abandoned.
    Unavailable { reason: String },
}

impl CellScore {
    pub fn scored(value: f64) -> Self {
        Self::Scored { value }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Convert a raw oracle response into a cell.
    ///
    /// Non-finite values are unusable; finite values are clamped into [0, 1].
    pub fn from_oracle(result: Result<f64, OracleError>) -> Self {
        match result {
            Ok(value) if value.is_finite() => Self::Scored {
                value: value.clamp(0.0, 1.0),
            },
            Ok(value) => Self::Unavailable {
                reason: format!("non-finite score {value}"),
            },
            Err(e) => Self::Unavailable {
                reason: e.to_string(),
            },
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Scored { value } => Some(*value),
            Self::Unavailable { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Scored { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(CellScore::from_oracle(Ok(1.7)).value(), Some(1.0));
        assert_eq!(CellScore::from_oracle(Ok(-0.2)).value(), Some(0.0));
    }

    #[test]
    fn nan_is_unavailable() {
        assert!(!CellScore::from_oracle(Ok(f64::NAN)).is_available());
    }

    #[test]
    fn oracle_error_keeps_reason() {
        let cell = CellScore::from_oracle(Err(OracleError::unavailable("provider down")));
        match cell {
            CellScore::Unavailable { reason } => assert!(reason.contains("provider down")),
            other => panic!("expected unavailable, got {other:?}"),
        }
    }
}
