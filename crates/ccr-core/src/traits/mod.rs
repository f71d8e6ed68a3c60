pub mod cancellation;
pub mod completion_client;
pub mod scoring_oracle;
pub mod uncertainty_source;
pub mod variant_strategy;

pub use cancellation::{Cancellable, CancellationToken};
pub use completion_client::ICompletionClient;
pub use scoring_oracle::IScoringOracle;
pub use uncertainty_source::{IUncertaintySource, UncertaintyEvidence};
pub use variant_strategy::IVariantStrategy;
