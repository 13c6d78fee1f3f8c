use thiserror::Error;

/// Structural problem with a saga definition, caught before any remote call
/// is made.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    /// The saga id was left unset.
    #[error("saga id must be nonzero")]
    MissingId,

    #[error("saga has no steps")]
    NoSteps,

    #[error("saga has no compensations")]
    NoCompensations,

    /// Compensations pair with steps by index, so the lists must line up.
    #[error("saga has {steps} step(s) but {compensations} compensation(s)")]
    LengthMismatch { steps: usize, compensations: usize },
}

/// Failure of a single executor call.
///
/// The engine treats every variant the same way: the call did not succeed.
/// The variants exist so logs and reports can say why.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExecuteError {
    /// The payload could not be encoded; no network attempt was made.
    #[error("failed to encode payload for '{target}'")]
    Serialize {
        target: String,
        #[source]
        source: serde_json::Error,
    },

    /// The call never produced a response (connect failure, timeout, ...).
    #[error("request to '{target}' failed: {message}")]
    Transport { target: String, message: String },

    /// The target answered with a non-success status.
    #[error("'{target}' rejected the call with status {status}: {body}")]
    Rejected {
        target: String,
        status: u16,
        body: String,
    },
}

/// A compensation call that failed during the reverse walk.
#[derive(Debug, Error)]
#[error("compensation {index} ('{target}') failed")]
pub struct CompensationFailure {
    /// Index into the saga's compensation list.
    pub index: usize,
    /// Target of the failed compensation call.
    pub target: String,
    /// The underlying call failure.
    #[source]
    pub error: ExecuteError,
}
