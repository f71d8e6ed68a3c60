use std::cmp::Ordering;

use ccr_core::models::RobustnessAssessment;

/// Best first: robustness descending, then mean descending. The sort is
/// stable, so remaining ties keep input order.
pub fn rank(mut assessments: Vec<RobustnessAssessment>) -> Vec<RobustnessAssessment> {
    assessments.sort_by(compare);
    assessments
}

fn compare(a: &RobustnessAssessment, b: &RobustnessAssessment) -> Ordering {
    b.robustness_score
        .total_cmp(&a.robustness_score)
        .then_with(|| b.mean_score.total_cmp(&a.mean_score))
}
