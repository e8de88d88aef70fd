use axum::extract::State;
use serde::Serialize;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub database: &'static str,
}

/// GET /health - liveness plus a database ping
pub async fn health(State(state): State<AppState>) -> ApiResult<HealthStatus> {
    state.health.ping().await.map_err(|e| {
        tracing::warn!("Health check failed: {}", e);
        ApiError::service_unavailable("Service degraded")
    })?;

    Ok(ApiResponse::success(HealthStatus {
        status: "ok",
        timestamp: chrono::Utc::now(),
        database: "ok",
    }))
}
