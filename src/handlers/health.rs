use crate::models::HealthResponse;
use axum::Json;
use tracing::debug;

/// Health check endpoint
///
/// Always reports ok; no store access.
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
