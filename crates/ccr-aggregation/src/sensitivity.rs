//! How much each action's support moves across variants.

use ccr_core::models::{RobustnessAssessment, RoutingResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionSensitivity {
    pub action_id: String,
    /// `max − min` across variants.
    pub sensitivity: f64,
    pub is_robust: bool,
    /// `1 − min(1, sensitivity)`.
    pub stability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityReport {
    pub actions: Vec<ActionSensitivity>,
    /// Lowest sensitivity; the earliest-ranked action wins ties.
    pub most_robust_action: Option<String>,
    /// `1 − variance` of the selected action, when one was selected.
    pub epistemic_stability: Option<f64>,
}

impl SensitivityReport {
    pub fn from_assessments(
        assessments: &[RobustnessAssessment],
        selected_id: Option<&str>,
    ) -> Self {
        let actions: Vec<ActionSensitivity> = assessments
            .iter()
            .map(|a| ActionSensitivity {
                action_id: a.action.id.clone(),
                sensitivity: a.sensitivity,
                is_robust: a.is_robust,
                stability: a.stability(),
            })
            .collect();

        let most_robust_action = actions
            .iter()
            .reduce(|best, next| {
                if next.sensitivity < best.sensitivity {
                    next
                } else {
                    best
                }
            })
            .map(|a| a.action_id.clone());

        let epistemic_stability = selected_id
            .and_then(|id| assessments.iter().find(|a| a.action.id == id))
            .map(|a| 1.0 - a.variance);

        Self {
            actions,
            most_robust_action,
            epistemic_stability,
        }
    }

    pub fn from_result(result: &RoutingResult) -> Self {
        Self::from_assessments(
            &result.per_action,
            result.selected_action().map(|a| a.id.as_str()),
        )
    }
}
