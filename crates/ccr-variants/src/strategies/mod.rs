//! Built-in variant strategies.
//!
//! The five epistemic strategies model partial, contradicted and reframed
//! knowledge; the noise models simulate measurement error on the same text.

pub mod contradictory_information;
pub mod noise_models;
pub mod partial_information;
pub mod reframing;

pub use contradictory_information::ContradictoryInformation;
pub use noise_models::{Identity, NumericPerturb, TokenDrop};
pub use partial_information::PartialInformation;
pub use reframing::Reframing;
