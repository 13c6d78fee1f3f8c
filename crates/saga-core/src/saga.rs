use std::time::Duration;

use tracing::{error, info};

use crate::error::{CompensationFailure, ExecuteError, ValidationError};
use crate::executor::StepExecutor;
use crate::outcome::{CompensationReport, SagaOutcome};
use crate::step::Step;

/// The unit of work: an ordered step list, an index-aligned compensation
/// list, and the timeout applied to every call either list issues.
///
/// A saga is built once, validated once, and run once. `compensations[i]`
/// undoes `steps[i]`; [`Saga::validate`] enforces that the lists line up.
#[derive(Debug, Clone)]
pub struct Saga {
    id: u64,
    steps: Vec<Step>,
    compensations: Vec<Step>,
    call_timeout: Duration,
}

impl Saga {
    #[must_use]
    pub fn new(
        id: u64,
        steps: Vec<Step>,
        compensations: Vec<Step>,
        call_timeout: Duration,
    ) -> Self {
        Self {
            id,
            steps,
            compensations,
            call_timeout,
        }
    }

    /// Identifier used for correlation in logs, never for deduplication.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn compensations(&self) -> &[Step] {
        &self.compensations
    }

    /// Check the structural invariants of the definition.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the id is zero, either list is empty,
    /// or the lists differ in length.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id == 0 {
            return Err(ValidationError::MissingId);
        }
        if self.steps.is_empty() {
            return Err(ValidationError::NoSteps);
        }
        if self.compensations.is_empty() {
            return Err(ValidationError::NoCompensations);
        }
        if self.steps.len() != self.compensations.len() {
            return Err(ValidationError::LengthMismatch {
                steps: self.steps.len(),
                compensations: self.compensations.len(),
            });
        }
        Ok(())
    }

    /// Execute the forward steps in order.
    ///
    /// The first failing step stops forward progress and hands control to
    /// the compensation walk. Every call attempt and its outcome is logged
    /// either way. Nothing here retries and nothing escapes as an error;
    /// both paths end in a terminal [`SagaOutcome`].
    pub async fn run(&self, executor: &dyn StepExecutor) -> SagaOutcome {
        info!(saga_id = self.id, steps = self.steps.len(), "starting saga");

        for (index, step) in self.steps.iter().enumerate() {
            info!(
                saga_id = self.id,
                index,
                url = %step.target,
                payload = %step.payload,
                "dispatching step"
            );

            match executor
                .execute(&step.target, &step.payload, self.call_timeout)
                .await
            {
                Ok(body) => {
                    info!(
                        saga_id = self.id,
                        index,
                        url = %step.target,
                        response = %body,
                        "step succeeded"
                    );
                }
                Err(step_error) => {
                    error!(
                        saga_id = self.id,
                        index,
                        url = %step.target,
                        error = %step_error,
                        "step failed, compensating"
                    );
                    return SagaOutcome::Compensated(
                        self.compensate(executor, index, step_error).await,
                    );
                }
            }
        }

        info!(saga_id = self.id, "all steps succeeded");
        SagaOutcome::Succeeded
    }

    /// Walk the compensations of every completed step in reverse order.
    ///
    /// The step at `failed_step` produced no effect, so the walk starts one
    /// index below it. A failing compensation is recorded and skipped;
    /// aborting the walk would leave earlier steps uncompensated.
    async fn compensate(
        &self,
        executor: &dyn StepExecutor,
        failed_step: usize,
        step_error: ExecuteError,
    ) -> CompensationReport {
        info!(saga_id = self.id, failed_step, "starting compensation walk");

        let mut failed_compensations = Vec::new();

        for index in (0..failed_step).rev() {
            let compensation = &self.compensations[index];
            info!(
                saga_id = self.id,
                index,
                url = %compensation.target,
                payload = %compensation.payload,
                "dispatching compensation"
            );

            match executor
                .execute(
                    &compensation.target,
                    &compensation.payload,
                    self.call_timeout,
                )
                .await
            {
                Ok(body) => {
                    info!(
                        saga_id = self.id,
                        index,
                        url = %compensation.target,
                        response = %body,
                        "compensation succeeded"
                    );
                }
                Err(error) => {
                    error!(
                        saga_id = self.id,
                        index,
                        url = %compensation.target,
                        error = %error,
                        "compensation failed, continuing walk"
                    );
                    failed_compensations.push(CompensationFailure {
                        index,
                        target: compensation.target.clone(),
                        error,
                    });
                }
            }
        }

        info!(
            saga_id = self.id,
            failed_step,
            failures = failed_compensations.len(),
            "compensation walk complete"
        );

        CompensationReport {
            failed_step,
            step_error,
            failed_compensations,
        }
    }
}
