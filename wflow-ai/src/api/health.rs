//! Liveness endpoints

use axum::Json;
use serde::Serialize;

/// Response of `GET /`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response of `GET /api/health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// GET /
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Workflow AI Service is running".to_string(),
    })
}

/// GET /api/health
///
/// Health check endpoint for monitoring.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "workflow-ai".to_string(),
    })
}
