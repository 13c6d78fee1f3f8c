//! HTTP dispatch behavior against loopback stub targets.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::extract::Json;
use axum::http::StatusCode;
use axum::routing::post;
use saga_core::{ExecuteError, StepExecutor};
use saga_dispatch::HttpDispatcher;
use serde_json::{Value, json};

async fn start_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr: SocketAddr = listener.local_addr().expect("stub addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub");
    });

    format!("http://{addr}")
}

async fn echo_handler(Json(payload): Json<Value>) -> (StatusCode, String) {
    (StatusCode::OK, payload.to_string())
}

#[tokio::test]
async fn successful_call_returns_the_response_body() {
    let base = start_stub(Router::new().route("/work", post(echo_handler))).await;
    let dispatcher = HttpDispatcher::new();

    let body = dispatcher
        .execute(
            &format!("{base}/work"),
            &json!({ "amount": 3 }),
            Duration::from_secs(2),
        )
        .await
        .expect("call should succeed");

    assert_eq!(body, json!({ "amount": 3 }).to_string());
}

#[tokio::test]
async fn non_success_status_is_rejected_with_status_and_body() {
    async fn refuse() -> (StatusCode, String) {
        (StatusCode::CONFLICT, "insufficient funds".to_string())
    }
    let base = start_stub(Router::new().route("/work", post(refuse))).await;

    let err = HttpDispatcher::new()
        .execute(&format!("{base}/work"), &json!({}), Duration::from_secs(2))
        .await
        .expect_err("conflict must fail the step");

    match err {
        ExecuteError::Rejected { status, body, .. } => {
            assert_eq!(status, 409);
            assert_eq!(body, "insufficient funds");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_target_times_out_as_a_transport_failure() {
    async fn stall() -> StatusCode {
        tokio::time::sleep(Duration::from_secs(5)).await;
        StatusCode::OK
    }
    let base = start_stub(Router::new().route("/work", post(stall))).await;

    let err = HttpDispatcher::new()
        .execute(
            &format!("{base}/work"),
            &json!({}),
            Duration::from_millis(100),
        )
        .await
        .expect_err("timeout must fail the step");

    assert!(matches!(err, ExecuteError::Transport { .. }));
}

#[tokio::test]
async fn unreachable_target_is_a_transport_failure() {
    // Bind a port to learn a free address, then drop it before the call.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);

    let err = HttpDispatcher::new()
        .execute(
            &format!("http://{addr}/work"),
            &json!({}),
            Duration::from_secs(1),
        )
        .await
        .expect_err("refused connection must fail the step");

    assert!(matches!(err, ExecuteError::Transport { .. }));
}
