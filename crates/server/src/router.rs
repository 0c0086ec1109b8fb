//! Webhook HTTP surface.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use relay::{DispatchResult, Pipeline};

use crate::error::ApiError;

/// Application state shared across handlers.
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
}

/// Create the webhook router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/webhook", post(webhook))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// POST /webhook
///
/// Takes the raw body rather than a JSON extractor: TradingView sometimes
/// sends alerts as `text/plain`, and the pipeline owns the forgiving parse.
async fn webhook(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<DispatchResult>, ApiError> {
    match state.pipeline.handle(&body).await {
        Ok(result) => Ok(Json(result)),
        Err(err) => {
            if err.status() >= 500 {
                tracing::warn!(error = %err, "Alert handling failed upstream");
            } else {
                tracing::debug!(error = %err, "Alert rejected");
            }
            Err(ApiError::from(err))
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
