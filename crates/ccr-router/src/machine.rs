//! Per-call router state machine.

use ccr_core::errors::{CcrError, CcrResult};
use ccr_core::models::RouterState;
use ccr_observability::tracing_setup::events;

/// Tracks one routing call through its lifecycle.
///
/// Built fresh for every `route()`; rejects illegal transitions and records
/// every visited state.
#[derive(Debug, Clone)]
pub struct RoutingMachine {
    state: RouterState,
    trail: Vec<RouterState>,
}

impl Default for RoutingMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl RoutingMachine {
    pub fn new() -> Self {
        Self {
            state: RouterState::Init,
            trail: vec![RouterState::Init],
        }
    }

    pub fn state(&self) -> RouterState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Move to `next`, or fail with `InvalidTransition` leaving the state unchanged.
    pub fn advance(&mut self, next: RouterState) -> CcrResult<()> {
        if !self.state.can_transition_to(next) {
            return Err(CcrError::InvalidTransition {
                from: self.state.to_string(),
                to: next.to_string(),
            });
        }
        events::state_transition(self.state, next);
        self.state = next;
        self.trail.push(next);
        Ok(())
    }

    pub fn trail(&self) -> &[RouterState] {
        &self.trail
    }

    pub fn into_trail(self) -> Vec<RouterState> {
        self.trail
    }
}
