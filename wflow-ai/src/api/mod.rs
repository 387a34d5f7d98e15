//! HTTP API handlers for wflow-ai

pub mod analytics;
pub mod extract;
pub mod health;
pub mod prediction;
pub mod summary;

pub use analytics::get_analytics;
pub use extract::ValidatedJson;
pub use health::{health_check, root};
pub use prediction::predict_approval;
pub use summary::summarize_workflow;

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::ApiError;
use crate::AppState;

/// Liveness routes (`/` and `/api/health`)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root).fallback(method_not_allowed))
        .route("/api/health", get(health_check).fallback(method_not_allowed))
}

/// Scoring, analytics and summary routes
///
/// Each route converts a handler panic into its own 500 error body.
pub fn service_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/analytics",
            get(get_analytics)
                .fallback(method_not_allowed)
                .layer(catch_panic(ApiError::Analytics)),
        )
        .route(
            "/api/predict-approval",
            post(predict_approval)
                .fallback(method_not_allowed)
                .layer(catch_panic(ApiError::Prediction)),
        )
        .route(
            "/api/summarize",
            post(summarize_workflow)
                .fallback(method_not_allowed)
                .layer(catch_panic(|message| {
                    ApiError::Common(wflow_common::Error::Internal(message))
                })),
        )
}

/// Router fallback for unknown paths
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Method fallback for known paths
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Layer turning a handler panic into `into_error(<panic message>)`
pub fn catch_panic(
    into_error: fn(String) -> ApiError,
) -> CatchPanicLayer<impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone> {
    CatchPanicLayer::custom(move |payload: Box<dyn Any + Send + 'static>| {
        into_error(panic_message(payload.as_ref())).into_response()
    })
}

/// Best-effort text of a panic payload
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unexpected failure".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::util::ServiceExt;

    async fn boom() -> &'static str {
        panic!("scorer table missing")
    }

    #[tokio::test]
    async fn test_handler_panic_becomes_detail_500() {
        let app: Router = Router::new().route(
            "/api/predict-approval",
            post(boom).layer(catch_panic(ApiError::Prediction)),
        );

        let request = Request::builder()
            .method("POST")
            .uri("/api/predict-approval")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["detail"], "Prediction error: scorer table missing");
    }

    #[test]
    fn test_panic_message_variants() {
        let owned: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(owned.as_ref()), "owned");

        let borrowed: Box<dyn Any + Send> = Box::new("borrowed");
        assert_eq!(panic_message(borrowed.as_ref()), "borrowed");

        let other: Box<dyn Any + Send> = Box::new(42_u32);
        assert_eq!(panic_message(other.as_ref()), "unexpected failure");
    }
}
