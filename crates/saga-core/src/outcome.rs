use crate::error::{CompensationFailure, ExecuteError};

/// Terminal result of running a saga.
#[derive(Debug)]
pub enum SagaOutcome {
    /// Every forward step succeeded; no compensation was invoked.
    Succeeded,
    /// A forward step failed and the reverse compensation walk completed.
    Compensated(CompensationReport),
}

impl SagaOutcome {
    /// Whether the saga completed without compensating.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// What happened during a compensation walk.
///
/// The walk always runs to completion; this report says where it started
/// and which individual compensation calls failed along the way.
#[derive(Debug)]
pub struct CompensationReport {
    /// Index of the forward step that failed.
    pub failed_step: usize,
    /// The error that stopped forward progress.
    pub step_error: ExecuteError,
    /// Compensations that failed during the walk, in walk order.
    pub failed_compensations: Vec<CompensationFailure>,
}

impl CompensationReport {
    /// Index of the last successfully completed step, where the walk
    /// started. `None` when the first step failed and there was nothing to
    /// undo.
    #[must_use]
    pub fn compensated_from(&self) -> Option<usize> {
        self.failed_step.checked_sub(1)
    }

    /// Whether every compensation call in the walk succeeded.
    #[must_use]
    pub fn fully_compensated(&self) -> bool {
        self.failed_compensations.is_empty()
    }
}
