//! Wire shapes of the submit endpoint.
//!
//! The request spells each entry out as `{ "target": ..., "payload": ... }`.
//! The legacy shape, a single-entry target→payload map per entry, is still
//! accepted and normalized here; the engine only ever sees [`Step`] records.

use std::collections::BTreeMap;

use saga_core::Step;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Decoded body of a submit request.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    /// Forward steps, in execution order.
    pub requests: Vec<WireStep>,
    /// Compensations, in the forward order of the steps they undo.
    pub requests_compensation: Vec<WireStep>,
}

/// One entry in either list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WireStep {
    /// Explicit record shape.
    Record { target: String, payload: Value },
    /// Legacy single-entry map shape.
    Legacy(BTreeMap<String, Value>),
}

/// Malformed wire entry.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum EnvelopeError {
    /// The legacy map shape is only unambiguous with exactly one entry.
    #[error("expected exactly one target per entry, found {entries}")]
    AmbiguousEntry { entries: usize },
}

impl WireStep {
    /// Normalize the wire shape into an engine step.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::AmbiguousEntry`] for a legacy map with zero
    /// or multiple entries.
    pub fn into_step(self) -> Result<Step, EnvelopeError> {
        match self {
            Self::Record { target, payload } => Ok(Step::new(target, payload)),
            Self::Legacy(map) => {
                let entries = map.len();
                let mut iter = map.into_iter();
                match (iter.next(), iter.next()) {
                    (Some((target, payload)), None) => Ok(Step::new(target, payload)),
                    _ => Err(EnvelopeError::AmbiguousEntry { entries }),
                }
            }
        }
    }
}

impl SubmitRequest {
    /// Normalize both lists into engine steps.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError`] if any entry in either list is malformed.
    pub fn into_lists(self) -> Result<(Vec<Step>, Vec<Step>), EnvelopeError> {
        let steps = into_steps(self.requests)?;
        let compensations = into_steps(self.requests_compensation)?;
        Ok((steps, compensations))
    }
}

fn into_steps(entries: Vec<WireStep>) -> Result<Vec<Step>, EnvelopeError> {
    entries.into_iter().map(WireStep::into_step).collect()
}

/// Body of a submit response after the saga ran to a terminal outcome.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub transaction_id: u64,
    pub status: SubmitStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_step: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed_compensations: Vec<FailedCompensation>,
}

/// Terminal status reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitStatus {
    Succeeded,
    Compensated,
}

/// A compensation call that failed during the walk.
#[derive(Debug, Serialize)]
pub struct FailedCompensation {
    pub index: usize,
    pub target: String,
    pub error: String,
}
