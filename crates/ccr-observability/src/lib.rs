//! # ccr-observability
//!
//! Tracing initialisation, span macros, structured routing events and
//! in-process routing metrics.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::RoutingMetrics;
pub use tracing_setup::{init_tracing, init_tracing_with};
