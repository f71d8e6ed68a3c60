//! Possible-worlds formalization of uncertainty.
//!
//! An agent knows `p` at a world iff `p` holds in every world it considers
//! possible from there. Uncertainty about `p` is the binary entropy of the
//! fraction of accessible worlds where `p` holds.

pub mod agent;
pub mod cognitive;
pub mod model;
pub mod query;
pub mod world;

pub use agent::EpistemicAgent;
pub use cognitive::CognitiveModule;
pub use model::KripkeModel;
pub use query::KripkeQuery;
pub use world::World;
