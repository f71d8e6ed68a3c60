//! Primary/secondary oracle chain.

use ccr_core::errors::OracleError;
use ccr_core::models::Action;
use ccr_core::traits::IScoringOracle;
use ccr_observability::tracing_setup::events;

/// Scores with `primary`, falling back to `fallback` when the primary fails
/// or returns a non-finite value.
#[derive(Debug, Clone)]
pub struct FallbackOracle<P, F> {
    primary: P,
    fallback: F,
    name: String,
}

impl<P, F> FallbackOracle<P, F>
where
    P: IScoringOracle,
    F: IScoringOracle,
{
    pub fn new(primary: P, fallback: F) -> Self {
        let name = format!("{}+{}", primary.name(), fallback.name());
        Self {
            primary,
            fallback,
            name,
        }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn fallback(&self) -> &F {
        &self.fallback
    }
}

impl<P, F> IScoringOracle for FallbackOracle<P, F>
where
    P: IScoringOracle,
    F: IScoringOracle,
{
    async fn score(&self, query: &str, context: &str, action: &Action) -> Result<f64, OracleError> {
        let failure = match self.primary.score(query, context, action).await {
            Ok(value) if value.is_finite() => return Ok(value),
            Ok(value) => format!("non-finite score {value}"),
            Err(e) => e.to_string(),
        };
        events::oracle_degraded(self.primary.name(), self.fallback.name(), &failure);
        self.fallback.score(query, context, action).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Result<f64, OracleError>, &'static str);

    impl IScoringOracle for Fixed {
        async fn score(&self, _q: &str, _c: &str, _a: &Action) -> Result<f64, OracleError> {
            self.0.clone()
        }

        fn name(&self) -> &str {
            self.1
        }
    }

    fn action() -> Action {
        Action::from_label("Approve")
    }

    #[tokio::test]
    async fn primary_answer_wins() {
        let oracle = FallbackOracle::new(Fixed(Ok(0.8), "llm"), Fixed(Ok(0.1), "heuristic"));
        assert_eq!(oracle.score("q", "c", &action()).await, Ok(0.8));
        assert_eq!(oracle.name(), "llm+heuristic");
    }

    #[tokio::test]
    async fn failure_degrades_to_fallback() {
        let oracle = FallbackOracle::new(
            Fixed(Err(OracleError::unavailable("quota")), "llm"),
            Fixed(Ok(0.4), "heuristic"),
        );
        assert_eq!(oracle.score("q", "c", &action()).await, Ok(0.4));
    }

    #[tokio::test]
    async fn nan_degrades_to_fallback() {
        let oracle = FallbackOracle::new(Fixed(Ok(f64::NAN), "llm"), Fixed(Ok(0.6), "heuristic"));
        assert_eq!(oracle.score("q", "c", &action()).await, Ok(0.6));
    }

    #[tokio::test]
    async fn both_failing_reports_fallback_error() {
        let oracle = FallbackOracle::new(
            Fixed(Err(OracleError::unavailable("quota")), "llm"),
            Fixed(Err(OracleError::Timeout { elapsed_ms: 5 }), "heuristic"),
        );
        assert_eq!(
            oracle.score("q", "c", &action()).await,
            Err(OracleError::Timeout { elapsed_ms: 5 })
        );
    }
}
