use ccr_aggregation::{RobustAggregator, SensitivityReport};
use ccr_core::config::RouteOptions;
use ccr_core::models::{Action, CellScore};

fn row(values: &[f64]) -> Vec<CellScore> {
    values.iter().map(|v| CellScore::scored(*v)).collect()
}

fn actions(labels: &[&str]) -> Vec<Action> {
    labels.iter().map(|l| Action::from_label(*l)).collect()
}

fn ids(aggregation: &ccr_aggregation::Aggregation) -> Vec<&str> {
    aggregation.ranked.iter().map(|a| a.action.id.as_str()).collect()
}

// ── Worst-case selection ────────────────────────────────────────────────────

#[test]
fn consistent_action_beats_indifferent_and_bad() {
    let aggregation = RobustAggregator::default().aggregate_matrix(
        &actions(&["Approve", "Deny", "Request more info"]),
        &[
            row(&[0.8, 0.75, 0.82]),
            row(&[0.2, 0.1, 0.15]),
            row(&[0.5, 0.5, 0.5]),
        ],
    );
    assert_eq!(ids(&aggregation), vec!["Approve", "Request more info", "Deny"]);
    let deny = &aggregation.ranked[2];
    assert!((deny.robustness_score - 0.0995).abs() < 1e-4);
}

#[test]
fn catastrophic_variant_sinks_the_best_average() {
    let aggregation = RobustAggregator::default().aggregate_matrix(
        &actions(&["Approve", "Deny", "Request more info"]),
        &[
            row(&[0.9, 0.1, 0.85]),
            row(&[0.2, 0.1, 0.15]),
            row(&[0.5, 0.5, 0.5]),
        ],
    );
    assert_eq!(aggregation.top().unwrap().action.id, "Request more info");
    // Approve has the higher mean but the lower robustness.
    let approve = aggregation
        .ranked
        .iter()
        .find(|a| a.action.id == "Approve")
        .unwrap();
    assert!(approve.mean_score > 0.5);
    assert!(approve.robustness_score < 0.1);
}

// ── Unavailable cells ───────────────────────────────────────────────────────

#[test]
fn inconclusive_actions_are_listed_in_input_order() {
    let down = vec![CellScore::unavailable("down"); 3];
    let aggregation = RobustAggregator::default().aggregate_matrix(
        &actions(&["a", "b", "c", "d"]),
        &[down.clone(), row(&[0.4, 0.5, 0.6]), down, row(&[0.7, 0.7, 0.7])],
    );
    let inconclusive: Vec<&str> = aggregation.inconclusive.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(inconclusive, vec!["a", "c"]);
    assert_eq!(ids(&aggregation), vec!["d", "b"]);
}

#[test]
fn partially_unavailable_action_uses_remaining_scores() {
    let mut partial = row(&[0.6, 0.7]);
    partial.insert(1, CellScore::unavailable("timeout"));
    let aggregation =
        RobustAggregator::default().aggregate_matrix(&actions(&["a"]), &[partial]);
    let a = &aggregation.ranked[0];
    assert_eq!(a.scored_variants, 2);
    assert_eq!(a.unavailable_variants, 1);
    assert_eq!(a.min_score, 0.6);
}

// ── Configuration ───────────────────────────────────────────────────────────

#[test]
fn zero_penalty_reduces_to_pure_worst_case() {
    let options = RouteOptions {
        variance_penalty: 0.0,
        ..RouteOptions::default()
    };
    let aggregation = RobustAggregator::from_options(&options)
        .aggregate_matrix(&actions(&["a"]), &[row(&[0.9, 0.1, 0.85])]);
    assert_eq!(aggregation.ranked[0].robustness_score, 0.1);
}

#[test]
fn sensitivity_threshold_is_strict() {
    let aggregator = RobustAggregator::new(0.3, 0.5);
    let a = aggregator
        .assess(&Action::from_label("a"), &row(&[0.25, 0.75]))
        .unwrap();
    assert!(!a.is_robust);
    let b = aggregator
        .assess(&Action::from_label("b"), &row(&[0.3, 0.75]))
        .unwrap();
    assert!(b.is_robust);
}

// ── Sensitivity report ──────────────────────────────────────────────────────

#[test]
fn sensitivity_report_picks_least_sensitive_action() {
    let aggregation = RobustAggregator::default().aggregate_matrix(
        &actions(&["Approve", "Deny", "Request more info"]),
        &[
            row(&[0.9, 0.1, 0.85]),
            row(&[0.2, 0.1, 0.15]),
            row(&[0.5, 0.5, 0.5]),
        ],
    );
    let report = SensitivityReport::from_assessments(&aggregation.ranked, Some("Request more info"));
    assert_eq!(report.most_robust_action.as_deref(), Some("Request more info"));
    assert_eq!(report.epistemic_stability, Some(1.0));

    let approve = report.actions.iter().find(|a| a.action_id == "Approve").unwrap();
    assert!(!approve.is_robust);
    assert!((approve.stability - 0.2).abs() < 1e-9);
}

#[test]
fn sensitivity_report_without_selection() {
    let report = SensitivityReport::from_assessments(&[], None);
    assert!(report.actions.is_empty());
    assert!(report.most_robust_action.is_none());
    assert!(report.epistemic_stability.is_none());
}
