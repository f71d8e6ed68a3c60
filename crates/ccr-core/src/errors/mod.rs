//! Error handling for the router.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod ccr_error;
pub mod config_error;
pub mod epistemic_error;
pub mod oracle_error;

pub use ccr_error::{CcrError, CcrResult};
pub use config_error::ConfigError;
pub use epistemic_error::EpistemicModelError;
pub use oracle_error::OracleError;
