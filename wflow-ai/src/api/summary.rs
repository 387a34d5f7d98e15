//! Workflow summary endpoint

use axum::Json;
use tracing::debug;

use super::extract::ValidatedJson;
use crate::models::{SummaryResponse, WorkflowRequest};
use crate::services::summarize;

/// POST /api/summarize
pub async fn summarize_workflow(
    ValidatedJson(request): ValidatedJson<WorkflowRequest>,
) -> Json<SummaryResponse> {
    debug!("Summarizing workflow '{}'", request.title);

    Json(SummaryResponse {
        summary: summarize(&request),
    })
}
