//! Validation gate and immutability guarantees.

use std::time::Duration;

use saga_core::testing::ScriptedExecutor;
use saga_core::{Saga, Step, ValidationError};
use serde_json::json;

fn step(target: &str) -> Step {
    Step::new(target, json!({ "op": target }))
}

#[test]
fn empty_step_list_fails_validation() {
    let saga = Saga::new(1, vec![], vec![step("a'")], Duration::from_secs(1));
    assert_eq!(saga.validate(), Err(ValidationError::NoSteps));
}

#[test]
fn empty_compensation_list_fails_validation() {
    let saga = Saga::new(1, vec![step("a")], vec![], Duration::from_secs(1));
    assert_eq!(saga.validate(), Err(ValidationError::NoCompensations));
}

#[test]
fn zero_id_fails_validation() {
    let saga = Saga::new(
        0,
        vec![step("a")],
        vec![step("a'")],
        Duration::from_secs(1),
    );
    assert_eq!(saga.validate(), Err(ValidationError::MissingId));
}

#[test]
fn mismatched_list_lengths_fail_validation() {
    let saga = Saga::new(
        1,
        vec![step("a"), step("b"), step("c")],
        vec![step("a'"), step("b'")],
        Duration::from_secs(1),
    );
    assert_eq!(
        saga.validate(),
        Err(ValidationError::LengthMismatch {
            steps: 3,
            compensations: 2,
        })
    );
}

#[test]
fn validation_errors_render_readable_messages() {
    let saga = Saga::new(
        1,
        vec![step("a"), step("b")],
        vec![step("a'")],
        Duration::from_secs(1),
    );
    let message = saga
        .validate()
        .expect_err("mismatched lengths must fail")
        .to_string();
    assert!(message.contains("2 step(s)"));
    assert!(message.contains("1 compensation(s)"));
}

#[tokio::test]
async fn running_does_not_mutate_the_definition() {
    let steps = vec![step("a"), step("b")];
    let compensations = vec![step("a'"), step("b'")];
    let saga = Saga::new(
        3,
        steps.clone(),
        compensations.clone(),
        Duration::from_secs(1),
    );

    let executor = ScriptedExecutor::new();
    executor.fail_target("b");
    saga.run(&executor).await;

    assert_eq!(saga.steps(), steps.as_slice());
    assert_eq!(saga.compensations(), compensations.as_slice());
    // A failed run does not change what validation has to say.
    assert_eq!(saga.validate(), Ok(()));
}
