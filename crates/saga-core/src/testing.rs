//! Test doubles for engine and service tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ExecuteError;
use crate::executor::StepExecutor;

/// One call observed by a [`ScriptedExecutor`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub target: String,
    pub payload: Value,
}

/// In-memory executor that records every call and fails scripted targets.
///
/// Calls are recorded in dispatch order, which is what the
/// compensation-order tests assert on. Targets registered through
/// [`ScriptedExecutor::fail_target`] fail with a transport error; everything
/// else succeeds with an `"ok"` body.
#[derive(Debug, Default)]
pub struct ScriptedExecutor {
    calls: Mutex<Vec<RecordedCall>>,
    failing: Mutex<Vec<String>>,
}

impl ScriptedExecutor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call to `target` fail with a transport error.
    pub fn fail_target(&self, target: impl Into<String>) {
        self.failing
            .lock()
            .expect("failing-target list poisoned")
            .push(target.into());
    }

    /// Targets called so far, in dispatch order.
    #[must_use]
    pub fn called_targets(&self) -> Vec<String> {
        self.calls
            .lock()
            .expect("call log poisoned")
            .iter()
            .map(|call| call.target.clone())
            .collect()
    }

    /// Every recorded call, in dispatch order.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("call log poisoned").clone()
    }
}

#[async_trait]
impl StepExecutor for ScriptedExecutor {
    async fn execute(
        &self,
        target: &str,
        payload: &Value,
        _timeout: Duration,
    ) -> Result<String, ExecuteError> {
        self.calls
            .lock()
            .expect("call log poisoned")
            .push(RecordedCall {
                target: target.to_string(),
                payload: payload.clone(),
            });

        let failing = self.failing.lock().expect("failing-target list poisoned");
        if failing.iter().any(|t| t == target) {
            return Err(ExecuteError::Transport {
                target: target.to_string(),
                message: "scripted failure".to_string(),
            });
        }

        Ok("ok".to_string())
    }
}
