use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ExecuteError;

/// Capability that performs one remote call for a step or compensation.
///
/// The engine issues every forward and compensation call through this port
/// and interprets nothing beyond success or failure. Implementations must be
/// safe to share across concurrently running sagas.
#[async_trait]
pub trait StepExecutor: Send + Sync {
    /// Send `payload` to `target`, waiting at most `timeout` for the call.
    ///
    /// Returns the response body on success.
    ///
    /// # Errors
    ///
    /// Returns [`ExecuteError`] if the payload cannot be encoded, the call
    /// cannot be delivered, or the target reports a non-success outcome.
    async fn execute(
        &self,
        target: &str,
        payload: &Value,
        timeout: Duration,
    ) -> Result<String, ExecuteError>;
}
