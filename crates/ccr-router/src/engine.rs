//! The router: one fresh state machine per `route()` call.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use ccr_aggregation::RobustAggregator;
use ccr_core::config::{CcrConfig, RouteOptions};
use ccr_core::errors::{CcrError, CcrResult};
use ccr_core::models::{
    Action, Context, Decision, DeferReason, RouteOutcome, RouterState, RoutingResult,
};
use ccr_core::traits::{CancellationToken, IScoringOracle};
use ccr_entropy::EntropyEvaluator;
use ccr_observability::route_span;
use ccr_observability::tracing_setup::events;
use ccr_observability::RoutingMetrics;
use ccr_variants::{StrategySet, VariantGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::Instrument;

use crate::decide::decide;
use crate::machine::RoutingMachine;
use crate::scoring::{score_matrix, ScoringLimits, ScoringOutcome};

/// Epistemic-robust action router.
///
/// Holds an injected scoring oracle, the variant strategies and default
/// per-call options. Calls are independent; the router itself only keeps
/// aggregate metrics.
pub struct Router<O> {
    oracle: Arc<O>,
    generator: VariantGenerator,
    options: RouteOptions,
    metrics: Mutex<RoutingMetrics>,
}

impl<O> std::fmt::Debug for Router<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("generator", &self.generator)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<O> Router<O>
where
    O: IScoringOracle + 'static,
{
    /// Build a router from a validated configuration.
    pub fn new(oracle: O, config: &CcrConfig) -> CcrResult<Self> {
        config.validate()?;
        let strategies = StrategySet::from_config(&config.variants)?;
        Ok(Self::with_options(oracle, RouteOptions::from(config))
            .with_strategies(strategies))
    }

    /// Router with the standard strategy set and the given default options.
    pub fn with_options(oracle: O, options: RouteOptions) -> Self {
        Self::from_shared(Arc::new(oracle), options)
    }

    /// Router sharing an oracle that is also used elsewhere.
    pub fn from_shared(oracle: Arc<O>, options: RouteOptions) -> Self {
        Self {
            oracle,
            generator: VariantGenerator::default(),
            options,
            metrics: Mutex::new(RoutingMetrics::new()),
        }
    }

    /// Replace the variant strategies.
    pub fn with_strategies(mut self, strategies: StrategySet) -> Self {
        self.generator = VariantGenerator::new(strategies);
        self
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn options(&self) -> &RouteOptions {
        &self.options
    }

    /// Snapshot of the metrics recorded so far.
    pub fn metrics(&self) -> RoutingMetrics {
        self.metrics
            .lock()
            .map(|metrics| metrics.clone())
            .unwrap_or_default()
    }

    /// Route with the router's default options.
    pub async fn route(
        &self,
        query: &str,
        context: &str,
        actions: &[Action],
        cancel: &CancellationToken,
    ) -> CcrResult<RouteOutcome> {
        self.route_with(query, context, actions, &self.options, cancel)
            .await
    }

    /// Route with explicit per-call options.
    ///
    /// Precondition failures return `InvalidInput` before any state
    /// transition. Oracle failures never surface here; they become
    /// unavailable cells.
    pub async fn route_with(
        &self,
        query: &str,
        context: &str,
        actions: &[Action],
        options: &RouteOptions,
        cancel: &CancellationToken,
    ) -> CcrResult<RouteOutcome> {
        validate_request(query, context, actions)?;
        options
            .validate()
            .map_err(|e| CcrError::invalid_input(format!("invalid options: {e}")))?;

        let context = Context::new(context);
        let fingerprint = context.fingerprint();
        let span = route_span!(fingerprint, actions.len(), options.variant_count);

        let outcome = self
            .run(query, &context, fingerprint, actions, options, cancel)
            .instrument(span)
            .await?;

        if let Ok(mut metrics) = self.metrics.lock() {
            metrics.record(&outcome);
        }
        Ok(outcome)
    }

    async fn run(
        &self,
        query: &str,
        context: &Context,
        fingerprint: String,
        actions: &[Action],
        options: &RouteOptions,
        cancel: &CancellationToken,
    ) -> CcrResult<RouteOutcome> {
        let mut machine = RoutingMachine::new();
        machine.advance(RouterState::GeneratingVariants)?;

        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let variants = self
            .generator
            .generate(context.as_str(), options.variant_count, &mut rng);
        let strategies: Vec<&str> = variants.iter().map(|v| v.strategy.as_str()).collect();
        events::variants_generated(variants.len(), &strategies);

        if variants.is_empty() {
            machine.advance(RouterState::Deferred)?;
            let reason = DeferReason::NoVariants;
            events::route_deferred(&reason, 0.0, false);
            return Ok(RouteOutcome::Routed(RoutingResult {
                decision: Decision::Deferred { reason },
                entropy: 0.0,
                normalized_entropy: 0.0,
                collapse: false,
                per_action: Vec::new(),
                inconclusive: Vec::new(),
                variants,
                trail: machine.into_trail(),
                context_fingerprint: fingerprint,
            }));
        }

        machine.advance(RouterState::Scoring)?;
        let matrix = match score_matrix(
            Arc::clone(&self.oracle),
            query,
            actions,
            &variants,
            ScoringLimits::from(options),
            cancel,
        )
        .await
        {
            ScoringOutcome::Completed(matrix) => matrix,
            ScoringOutcome::Canceled => {
                machine.advance(RouterState::Canceled)?;
                return Ok(RouteOutcome::Canceled);
            }
        };

        machine.advance(RouterState::Aggregating)?;
        let aggregation = RobustAggregator::from_options(options).aggregate_matrix(actions, matrix.rows());
        for action in &aggregation.inconclusive {
            events::action_inconclusive(&action.id);
        }

        machine.advance(RouterState::Deciding)?;
        let signal = EntropyEvaluator::from_options(options).assess_scores(&aggregation.robustness_scores());
        let decision = decide(&aggregation, &signal, options.entropy_threshold);

        match &decision {
            Decision::Selected {
                action,
                robustness_score,
            } => {
                machine.advance(RouterState::Selected)?;
                events::action_selected(&action.id, *robustness_score, signal.entropy);
            }
            Decision::Deferred { reason } => {
                machine.advance(RouterState::Deferred)?;
                events::route_deferred(reason, signal.entropy, signal.collapse);
            }
        }

        Ok(RouteOutcome::Routed(RoutingResult {
            decision,
            entropy: signal.entropy,
            normalized_entropy: signal.normalized_entropy,
            collapse: signal.collapse,
            per_action: aggregation.ranked,
            inconclusive: aggregation.inconclusive,
            variants,
            trail: machine.into_trail(),
            context_fingerprint: fingerprint,
        }))
    }
}

/// Reject requests the router cannot route at all.
fn validate_request(query: &str, context: &str, actions: &[Action]) -> CcrResult<()> {
    if query.trim().is_empty() {
        return Err(CcrError::invalid_input("query is empty"));
    }
    if context.trim().is_empty() {
        return Err(CcrError::invalid_input("context is empty"));
    }
    if actions.is_empty() {
        return Err(CcrError::invalid_input("no candidate actions"));
    }
    let mut seen = HashSet::with_capacity(actions.len());
    for action in actions {
        if action.id.trim().is_empty() {
            return Err(CcrError::invalid_input("action id is empty"));
        }
        if !seen.insert(action.id.as_str()) {
            return Err(CcrError::invalid_input(format!(
                "duplicate action id: {}",
                action.id
            )));
        }
    }
    Ok(())
}
