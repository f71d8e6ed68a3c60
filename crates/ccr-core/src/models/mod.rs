pub mod action;
pub mod assessment;
pub mod cell_score;
pub mod context;
pub mod router_state;
pub mod routing_result;
pub mod uncertainty;
pub mod variant;

pub use action::Action;
pub use assessment::RobustnessAssessment;
pub use cell_score::CellScore;
pub use context::Context;
pub use router_state::RouterState;
pub use routing_result::{Decision, DeferReason, RouteOutcome, RoutingResult};
pub use uncertainty::UncertaintySignal;
pub use variant::Variant;
