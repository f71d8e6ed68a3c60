//! Belief routing: score competing hypotheses about a question and commit to
//! one only when the belief distribution is sharp.

use std::sync::Arc;

use ccr_core::config::RouteOptions;
use ccr_core::errors::{CcrError, CcrResult};
use ccr_core::models::{Action, CellScore};
use ccr_core::traits::IScoringOracle;
use ccr_entropy::EntropyEvaluator;
use ccr_observability::belief_span;
use serde::Serialize;
use tracing::{info, Instrument};

/// Hypotheses generated when none is specified.
pub const DEFAULT_HYPOTHESES: usize = 5;

/// `k` competing readings of `question`, one per assumption set.
pub fn generate_hypotheses(question: &str, k: usize) -> Vec<String> {
    (0..k)
        .map(|i| format!("H{i}: {question} under assumption set {i}"))
        .collect()
}

/// One hypothesis and the oracle's plausibility for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeliefScore {
    pub hypothesis: String,
    pub score: CellScore,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum BeliefDecision {
    Selected { hypothesis: String, score: f64 },
    Deferred,
}

/// Result of one belief-routing call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeliefOutcome {
    pub decision: BeliefDecision,
    /// Distribution entropy over the usable belief scores.
    pub entropy: f64,
    pub collapse: bool,
    pub beliefs: Vec<BeliefScore>,
}

impl BeliefOutcome {
    pub fn is_deferred(&self) -> bool {
        matches!(self.decision, BeliefDecision::Deferred)
    }
}

/// Scores generated hypotheses with an injected oracle.
pub struct BeliefRouter<O> {
    oracle: Arc<O>,
    evaluator: EntropyEvaluator,
    entropy_threshold: f64,
    hypotheses: usize,
}

impl<O: IScoringOracle> BeliefRouter<O> {
    pub fn new(oracle: O) -> Self {
        Self::from_options(Arc::new(oracle), &RouteOptions::default())
    }

    pub fn from_options(oracle: Arc<O>, options: &RouteOptions) -> Self {
        Self {
            oracle,
            evaluator: EntropyEvaluator::from_options(options),
            entropy_threshold: options.entropy_threshold,
            hypotheses: DEFAULT_HYPOTHESES,
        }
    }

    pub fn with_hypotheses(mut self, k: usize) -> Self {
        self.hypotheses = k;
        self
    }

    /// Generate, score and judge hypotheses about `question` under `context`.
    ///
    /// Unscorable hypotheses are kept in `beliefs` but excluded from the
    /// entropy. Defers when entropy exceeds the threshold, when the top
    /// beliefs collapse, or when no hypothesis could be scored.
    pub async fn route(&self, question: &str, context: &str) -> CcrResult<BeliefOutcome> {
        if question.trim().is_empty() {
            return Err(CcrError::invalid_input("question is empty"));
        }
        if self.hypotheses == 0 {
            return Err(CcrError::invalid_input("at least one hypothesis is required"));
        }

        let span = belief_span!(self.hypotheses);
        async move {
            let hypotheses: Vec<Action> = generate_hypotheses(question, self.hypotheses)
                .into_iter()
                .enumerate()
                .map(|(i, text)| Action::new(format!("H{i}"), text))
                .collect();

            let beliefs: Vec<BeliefScore> = self
                .oracle
                .score_batch(question, context, &hypotheses)
                .await
                .into_iter()
                .zip(hypotheses)
                .map(|(result, action)| BeliefScore {
                    hypothesis: action.label,
                    score: CellScore::from_oracle(result),
                })
                .collect();

            let usable: Vec<f64> = beliefs.iter().filter_map(|b| b.score.value()).collect();
            let signal = self.evaluator.assess_scores(&usable);

            let best = beliefs
                .iter()
                .filter_map(|b| b.score.value().map(|v| (b, v)))
                .fold(None::<(&BeliefScore, f64)>, |best, (b, v)| match best {
                    Some((_, top)) if top >= v => best,
                    _ => Some((b, v)),
                });

            let decision = match best {
                Some((belief, score))
                    if signal.entropy <= self.entropy_threshold && !signal.collapse =>
                {
                    BeliefDecision::Selected {
                        hypothesis: belief.hypothesis.clone(),
                        score,
                    }
                }
                _ => BeliefDecision::Deferred,
            };

            info!(
                entropy = signal.entropy,
                collapse = signal.collapse,
                usable = usable.len(),
                deferred = matches!(decision, BeliefDecision::Deferred),
                "beliefs assessed"
            );

            Ok(BeliefOutcome {
                decision,
                entropy: signal.entropy,
                collapse: signal.collapse,
                beliefs,
            })
        }
        .instrument(span)
        .await
    }
}
