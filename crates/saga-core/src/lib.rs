//! Saga execution and compensation engine.
//!
//! A saga is an ordered sequence of remote calls, each paired with a
//! compensating call that undoes its effect. The engine runs the forward
//! steps in order through a [`StepExecutor`]; on the first failure it walks
//! the compensations of every previously completed step in reverse order
//! and reports which of them failed.

mod error;
mod executor;
mod outcome;
mod saga;
mod step;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{CompensationFailure, ExecuteError, ValidationError};
pub use executor::StepExecutor;
pub use outcome::{CompensationReport, SagaOutcome};
pub use saga::Saga;
pub use step::Step;
