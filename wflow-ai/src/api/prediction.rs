//! Approval prediction endpoint

use axum::{extract::State, Json};
use tracing::debug;

use super::extract::ValidatedJson;
use crate::models::{PredictionResult, WorkflowRequest};
use crate::AppState;

/// POST /api/predict-approval
///
/// Scores a workflow with the rule-based approval scorer.
pub async fn predict_approval(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<WorkflowRequest>,
) -> Json<PredictionResult> {
    let prediction = state.scorer.predict_request(&request);

    debug!(
        workflow_type = %request.workflow_type,
        department = %request.department,
        amount = request.amount_or_zero(),
        probability = prediction.approval_probability,
        suggestion = %prediction.suggestion,
        "Scored workflow"
    );

    Json(prediction)
}
