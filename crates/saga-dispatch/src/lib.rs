//! Outbound HTTP step executor.
//!
//! Sends each step or compensation as an HTTP POST with a JSON body and a
//! per-request timeout. A non-2xx response, a transport-level failure, and a
//! payload that cannot be encoded all surface as the same "call did not
//! succeed" signal to the engine.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use saga_core::{ExecuteError, StepExecutor};
use serde_json::Value;
use tracing::debug;

/// [`StepExecutor`] backed by a shared [`reqwest::Client`].
///
/// The client is connection-pooled and safe to share across concurrently
/// running sagas. The per-call timeout comes from the saga, so the client
/// itself carries none.
#[derive(Debug, Clone, Default)]
pub struct HttpDispatcher {
    client: reqwest::Client,
}

impl HttpDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl StepExecutor for HttpDispatcher {
    async fn execute(
        &self,
        target: &str,
        payload: &Value,
        timeout: Duration,
    ) -> Result<String, ExecuteError> {
        // Encode before dispatch; a payload that cannot be serialized never
        // reaches the network.
        let body = serde_json::to_vec(payload).map_err(|source| ExecuteError::Serialize {
            target: target.to_string(),
            source,
        })?;

        debug!(url = %target, bytes = body.len(), "sending step request");

        let response = self
            .client
            .post(target)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .timeout(timeout)
            .send()
            .await
            .map_err(|err| ExecuteError::Transport {
                target: target.to_string(),
                message: err.to_string(),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ExecuteError::Transport {
                target: target.to_string(),
                message: err.to_string(),
            })?;

        debug!(url = %target, status = %status, body = %body, "received step response");

        if status.is_success() {
            Ok(body)
        } else {
            Err(ExecuteError::Rejected {
                target: target.to_string(),
                status: status.as_u16(),
                body,
            })
        }
    }
}
