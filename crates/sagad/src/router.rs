//! HTTP surface of the coordinator.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::Router;
use axum::extract::{Json, State};
use axum::routing::post;
use saga_core::StepExecutor;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::envelope::{SubmitRequest, SubmitResponse};
use crate::error::SubmitError;
use crate::workflow;

/// Base path of the coordinator API.
pub const API_PATH: &str = "/api/rtu";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8998;

/// Shared state for request handlers.
#[derive(Clone)]
pub struct AppState {
    executor: Arc<dyn StepExecutor>,
    call_timeout: Duration,
}

impl AppState {
    #[must_use]
    pub fn new(executor: Arc<dyn StepExecutor>, call_timeout: Duration) -> Self {
        Self {
            executor,
            call_timeout,
        }
    }
}

/// Build the application router.
#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(&format!("{API_PATH}/submit"), post(submit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn submit(
    State(state): State<AppState>,
    Json(envelope): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, SubmitError> {
    let began = Instant::now();

    let result = workflow::execute(state.executor.as_ref(), state.call_timeout, envelope).await;

    match &result {
        Ok(response) => info!(
            elapsed = ?began.elapsed(),
            transaction_id = response.transaction_id,
            status = ?response.status,
            "submit complete"
        ),
        Err(error) => info!(
            elapsed = ?began.elapsed(),
            error = %error,
            "submit rejected"
        ),
    }

    result.map(Json)
}
