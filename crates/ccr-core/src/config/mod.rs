//! Configuration for the router.
//! TOML-based, resolution: env > file > compiled defaults.

pub mod aggregation_config;
pub mod ccr_config;
pub mod defaults;
pub mod entropy_config;
pub mod observability_config;
pub mod route_options;
pub mod router_config;
pub mod variant_config;

pub use aggregation_config::AggregationConfig;
pub use ccr_config::CcrConfig;
pub use entropy_config::EntropyConfig;
pub use observability_config::ObservabilityConfig;
pub use route_options::RouteOptions;
pub use router_config::RouterConfig;
pub use variant_config::VariantConfig;
