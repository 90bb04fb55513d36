use crate::{errors::ServiceError, ApiResponse, ApiResult, AppState};
use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;
use std::sync::OnceLock;
use std::time::Instant;
use tracing::warn;
use utoipa::ToSchema;

/// Tracks application start time for uptime calculation
static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Initialize the start time (call this on application startup)
pub fn init_start_time() {
    let _ = START_TIME.get_or_init(Instant::now);
}

fn uptime_secs() -> u64 {
    START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0)
}

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/status", get(api_status))
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: String,
    pub storage: String,
    pub storage_latency_ms: u64,
    pub uptime_secs: u64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub service: String,
    pub version: String,
    pub environment: String,
    pub storage_backend: String,
}

/// Storage reachability
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Storage reachable", body = ApiResponse<HealthReport>),
        (status = 503, description = "Storage unreachable", body = crate::errors::ErrorResponse)
    ),
    tag = "Service"
)]
pub async fn health_check(State(state): State<AppState>) -> ApiResult<HealthReport> {
    let started = Instant::now();
    if let Err(err) = state.repositories.cattle.ping().await {
        warn!(error = %err, "health check failed");
        return Err(ServiceError::ServiceUnavailable(
            "Storage is unreachable".to_string(),
        ));
    }

    Ok(Json(ApiResponse::success(HealthReport {
        status: "healthy".to_string(),
        storage: state.config.storage_backend.clone(),
        storage_latency_ms: started.elapsed().as_millis() as u64,
        uptime_secs: uptime_secs(),
    })))
}

/// Build and environment information
#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "Service status", body = ApiResponse<StatusReport>)
    ),
    tag = "Service"
)]
pub async fn api_status(State(state): State<AppState>) -> ApiResult<StatusReport> {
    Ok(Json(ApiResponse::success(StatusReport {
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
        storage_backend: state.config.storage_backend.clone(),
    })))
}
