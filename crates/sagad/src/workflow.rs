//! Submit workflow: normalize, build, validate, run, render.

use std::time::Duration;

use saga_core::{Saga, SagaOutcome, StepExecutor};
use tracing::info;

use crate::envelope::{FailedCompensation, SubmitRequest, SubmitResponse, SubmitStatus};
use crate::error::SubmitError;
use crate::txid;

/// Build, validate and run a saga from a decoded envelope.
///
/// # Errors
///
/// Returns [`SubmitError`] when the envelope cannot be normalized or the
/// saga definition fails validation. In both cases no remote call has been
/// made.
pub async fn execute(
    executor: &dyn StepExecutor,
    call_timeout: Duration,
    envelope: SubmitRequest,
) -> Result<SubmitResponse, SubmitError> {
    let (steps, compensations) = envelope.into_lists()?;

    let saga = Saga::new(txid::generate(), steps, compensations, call_timeout);
    saga.validate()?;

    info!(saga_id = saga.id(), steps = saga.steps().len(), "accepted saga");

    let outcome = saga.run(executor).await;
    Ok(render(saga.id(), outcome))
}

fn render(transaction_id: u64, outcome: SagaOutcome) -> SubmitResponse {
    match outcome {
        SagaOutcome::Succeeded => SubmitResponse {
            transaction_id,
            status: SubmitStatus::Succeeded,
            failed_step: None,
            error: None,
            failed_compensations: Vec::new(),
        },
        SagaOutcome::Compensated(report) => SubmitResponse {
            transaction_id,
            status: SubmitStatus::Compensated,
            failed_step: Some(report.failed_step),
            error: Some(report.step_error.to_string()),
            failed_compensations: report
                .failed_compensations
                .iter()
                .map(|failure| FailedCompensation {
                    index: failure.index,
                    target: failure.target.clone(),
                    error: failure.error.to_string(),
                })
                .collect(),
        },
    }
}
