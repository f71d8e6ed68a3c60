//! Scoring oracle adapters: reply parsing, prompt-based scoring and
//! primary/fallback chaining.

pub mod fallback;
pub mod parse;
pub mod prompt;

pub use fallback::FallbackOracle;
pub use parse::parse_score;
pub use prompt::{scoring_prompt, PromptOracle};
