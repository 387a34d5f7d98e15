//! Request and response types for the workflow AI API
//!
//! JSON field names follow the dashboard front end (camelCase).

use serde::{Deserialize, Serialize};

/// Workflow submitted for scoring or summarizing
///
/// Every field except `amount` is required. An absent or `null` amount is
/// treated as 0.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WorkflowRequest {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub workflow_type: String,
    #[serde(default)]
    pub amount: Option<f64>,
    pub department: String,
}

impl WorkflowRequest {
    /// Requested amount, 0 when absent
    pub fn amount_or_zero(&self) -> f64 {
        self.amount.unwrap_or(0.0)
    }
}

/// Categorical recommendation derived from the approval probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Suggestion {
    Approve,
    Review,
    Reject,
}

impl Suggestion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Suggestion::Approve => "APPROVE",
            Suggestion::Review => "REVIEW",
            Suggestion::Reject => "REJECT",
        }
    }
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Approval prediction for a workflow
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// Heuristic score in [0.1, 0.95], two decimals
    pub approval_probability: f64,
    pub suggestion: Suggestion,
    /// `0.85 + approval_probability * 0.1`, two decimals
    pub confidence: f64,
}

/// Response body of `POST /api/summarize`
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_amount_defaults_to_zero() {
        let request: WorkflowRequest = serde_json::from_value(json!({
            "title": "Laptop",
            "description": "Replacement laptop",
            "type": "PURCHASE",
            "department": "IT"
        }))
        .unwrap();
        assert_eq!(request.amount, None);
        assert_eq!(request.amount_or_zero(), 0.0);

        let request: WorkflowRequest = serde_json::from_value(json!({
            "title": "Laptop",
            "description": "Replacement laptop",
            "type": "PURCHASE",
            "amount": null,
            "department": "IT"
        }))
        .unwrap();
        assert_eq!(request.amount_or_zero(), 0.0);
    }

    #[test]
    fn test_request_requires_type() {
        let result = serde_json::from_value::<WorkflowRequest>(json!({
            "title": "Laptop",
            "description": "Replacement laptop",
            "department": "IT"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_prediction_serializes_camel_case() {
        let prediction = PredictionResult {
            approval_probability: 0.5,
            suggestion: Suggestion::Review,
            confidence: 0.9,
        };
        let value = serde_json::to_value(prediction).unwrap();
        assert_eq!(
            value,
            json!({"approvalProbability": 0.5, "suggestion": "REVIEW", "confidence": 0.9})
        );
    }
}
