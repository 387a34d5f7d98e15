//! Dashboard analytics endpoint

use axum::{extract::State, Json};

use crate::services::AnalyticsPayload;
use crate::AppState;

/// GET /api/analytics
///
/// Returns the fixed analytics payload used by the dashboard.
pub async fn get_analytics(State(state): State<AppState>) -> Json<AnalyticsPayload> {
    Json(state.analytics.generate())
}
