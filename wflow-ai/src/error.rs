//! Error types for wflow-ai
//!
//! Every error response has the body `{"detail": "<message>"}`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body rejected before reaching a handler (4xx)
    #[error("{0}")]
    Validation(#[from] JsonRejection),

    /// Scoring failed (500)
    #[error("Prediction error: {0}")]
    Prediction(String),

    /// Analytics payload could not be produced (500)
    #[error("Analytics error: {0}")]
    Analytics(String),

    /// No route for the request path (404)
    #[error("Not Found")]
    NotFound,

    /// Route exists but not for this method (405)
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// wflow-common error (500)
    #[error(transparent)]
    Common(#[from] wflow_common::Error),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(rejection) => rejection.status(),
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Prediction(_)
            | ApiError::Analytics(_)
            | ApiError::Common(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            ApiError::Validation(rejection) => rejection.body_text(),
            other => other.to_string(),
        };

        if status.is_server_error() {
            tracing::error!("{}", detail);
        } else {
            tracing::debug!("Rejected request: {}", detail);
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
