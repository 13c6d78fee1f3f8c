use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One unit of remote work: a destination and the payload to send there.
///
/// The same record describes forward steps and compensations; a saga pairs
/// the two lists by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Opaque destination identifier resolved by the executor (e.g. a URL).
    pub target: String,
    /// Arbitrary JSON value sent to the target.
    pub payload: Value,
}

impl Step {
    #[must_use]
    pub fn new(target: impl Into<String>, payload: Value) -> Self {
        Self {
            target: target.into(),
            payload,
        }
    }
}
