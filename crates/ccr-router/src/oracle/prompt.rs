//! Scoring oracle over a free-text completion backend.

use ccr_core::errors::OracleError;
use ccr_core::models::Action;
use ccr_core::traits::{ICompletionClient, IScoringOracle};
use tracing::debug;

use super::parse::parse_score;

/// Role the completion backend is asked to play.
pub const JUDGE_ROLE: &str = "Epistemic Judge";

/// Context characters included in the prompt.
pub const MAX_PROMPT_CONTEXT_CHARS: usize = 300;

/// Asks a completion backend to rate an action and parses the reply.
#[derive(Debug, Clone)]
pub struct PromptOracle<C> {
    client: C,
}

impl<C: ICompletionClient> PromptOracle<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

/// Rating prompt for one (query, context, action) cell.
pub fn scoring_prompt(query: &str, context: &str, action: &Action) -> String {
    let excerpt: String = context.chars().take(MAX_PROMPT_CONTEXT_CHARS).collect();
    format!(
        "Given this context and query, rate how appropriate the action is.\n\n\
         Context: {excerpt}\n\n\
         Query: {query}\n\n\
         Proposed Action: {action}\n\n\
         Rate appropriateness on a scale from 0.0 to 1.0 where:\n\
         0.0 = Completely inappropriate\n\
         0.5 = Neutral/Uncertain\n\
         1.0 = Perfectly appropriate\n\n\
         Consider alignment with the context and practical feasibility.\n\
         Return ONLY a number:"
    )
}

impl<C: ICompletionClient> IScoringOracle for PromptOracle<C> {
    async fn score(&self, query: &str, context: &str, action: &Action) -> Result<f64, OracleError> {
        let prompt = scoring_prompt(query, context, action);
        let reply = self.client.complete(JUDGE_ROLE, &prompt).await?;
        let score = parse_score(&reply)?;
        debug!(backend = self.client.name(), action = %action.id, score, "prompt scored");
        Ok(score)
    }

    fn name(&self) -> &str {
        self.client.name()
    }
}
