//! wflow-ai library - Workflow AI service
//!
//! Rule-based approval scoring, dashboard analytics fixtures and workflow
//! summaries over plain JSON. Stateless: every response is computed from the
//! request and read-only tables.

pub mod api;
pub mod error;
pub mod models;
pub mod services;

pub use crate::error::ApiError;

use std::sync::Arc;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::services::{AnalyticsService, ApprovalScorer};

/// Application state shared across HTTP handlers
///
/// Services are built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub scorer: Arc<ApprovalScorer>,
    pub analytics: Arc<AnalyticsService>,
}

impl AppState {
    pub fn new(scorer: ApprovalScorer, analytics: AnalyticsService) -> Self {
        Self {
            scorer: Arc::new(scorer),
            analytics: Arc::new(analytics),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ApprovalScorer::new(), AnalyticsService::new())
    }
}

/// Build application router
///
/// CORS is permissive: the dashboard front end calls this service from
/// another origin.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::health_routes())
        .merge(api::service_routes())
        .fallback(api::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
