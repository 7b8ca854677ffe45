use crate::routes::types::HealthCheckResponse;
use axum::response::IntoResponse;
use axum::Json;

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
    })
}
