use std::future::Future;

use crate::errors::OracleError;

/// Free-text completion backend behind a prompt-based scoring oracle.
///
/// Transport, authentication and retries belong to the implementation.
pub trait ICompletionClient: Send + Sync {
    /// Complete `prompt` under the given system role.
    fn complete(
        &self,
        role: &str,
        prompt: &str,
    ) -> impl Future<Output = Result<String, OracleError>> + Send;

    /// Backend name, used in logs.
    fn name(&self) -> &str;
}
