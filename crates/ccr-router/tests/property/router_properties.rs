//! Property tests for end-to-end routing.

use proptest::prelude::*;

use ccr_core::config::RouteOptions;
use ccr_core::models::{Action, RouteOutcome, RouterState};
use ccr_core::traits::CancellationToken;
use ccr_router::Router;
use test_fixtures::{tagged_worlds, ScriptedOracle};

const WORLDS: usize = 3;

fn rows() -> impl Strategy<Value = Vec<Vec<Option<f64>>>> {
    prop::collection::vec(
        prop::collection::vec(prop::option::weighted(0.85, 0.0f64..=1.0), WORLDS),
        1..6,
    )
}

fn route(rows: &[Vec<Option<f64>>], seed: u64) -> (Vec<Action>, RouteOutcome) {
    let actions: Vec<Action> = (0..rows.len())
        .map(|i| Action::new(format!("a{i}"), format!("action {i}")))
        .collect();
    let oracle = rows
        .iter()
        .zip(&actions)
        .fold(ScriptedOracle::new(), |oracle, (row, action)| oracle.with_row(&action.id, row));
    let router = Router::with_options(oracle, RouteOptions::default().with_seed(seed))
        .with_strategies(tagged_worlds(WORLDS));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    let outcome = runtime
        .block_on(router.route(
            "Which action?",
            "Some context. With two sentences.",
            &actions,
            &CancellationToken::new(),
        ))
        .unwrap();
    (actions, outcome)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_every_action_is_ranked_or_inconclusive(rows in rows(), seed in any::<u64>()) {
        let (actions, outcome) = route(&rows, seed);
        let result = outcome.into_result().unwrap();

        let mut seen: Vec<&str> = result
            .per_action
            .iter()
            .map(|a| a.action.id.as_str())
            .chain(result.inconclusive.iter().map(|a| a.id.as_str()))
            .collect();
        seen.sort_unstable();
        let mut expected: Vec<&str> = actions.iter().map(|a| a.id.as_str()).collect();
        expected.sort_unstable();
        prop_assert_eq!(seen, expected);

        for (row, action) in rows.iter().zip(&actions) {
            let all_missing = row.iter().all(Option::is_none);
            prop_assert_eq!(result.inconclusive.contains(action), all_missing);
        }
    }

    #[test]
    fn prop_ranking_and_signal_are_well_formed(rows in rows(), seed in any::<u64>()) {
        let (_, outcome) = route(&rows, seed);
        let result = outcome.into_result().unwrap();

        for pair in result.per_action.windows(2) {
            prop_assert!(pair[0].robustness_score >= pair[1].robustness_score);
        }
        prop_assert!(result.entropy >= 0.0);
        prop_assert!((0.0..=1.0).contains(&result.normalized_entropy));
        prop_assert_eq!(result.trail.first(), Some(&RouterState::Init));
        prop_assert!(result.trail.last().is_some_and(RouterState::is_terminal));

        if let Some(selected) = result.selected_action() {
            prop_assert_eq!(Some(selected), result.per_action.first().map(|a| &a.action));
            prop_assert!(result.per_action.len() >= 2);
            prop_assert!(!result.collapse);
        }
    }

    #[test]
    fn prop_seeded_routing_is_reproducible(rows in rows(), seed in any::<u64>()) {
        let (_, first) = route(&rows, seed);
        let (_, second) = route(&rows, seed);
        prop_assert_eq!(first, second);
    }
}
