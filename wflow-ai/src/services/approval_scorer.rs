//! Rule-based approval scorer
//!
//! Combines a workflow-type weight and a department weight, adjusts for the
//! requested amount, and derives a suggestion and confidence from the
//! resulting probability. No randomness and no state beyond the two
//! read-only weight tables.

use std::collections::HashMap;

use crate::models::{PredictionResult, Suggestion, WorkflowRequest};

/// Weight used for any workflow type or department not in the tables
pub const NEUTRAL_WEIGHT: f64 = 0.5;

/// Lower bound of the published approval probability
pub const MIN_PROBABILITY: f64 = 0.1;

/// Upper bound of the published approval probability
pub const MAX_PROBABILITY: f64 = 0.95;

/// Probabilities above this are suggested for approval
pub const APPROVE_THRESHOLD: f64 = 0.7;

/// Probabilities above this (and not above APPROVE_THRESHOLD) need review
pub const REVIEW_THRESHOLD: f64 = 0.4;

const TYPE_WEIGHTS: &[(&str, f64)] = &[
    ("LEAVE", 0.8),
    ("PURCHASE", 0.6),
    ("BUDGET", 0.4),
    ("PROJECT", 0.7),
];

const DEPARTMENT_WEIGHTS: &[(&str, f64)] = &[
    ("Engineering", 0.8),
    ("Finance", 0.6),
    ("HR", 0.9),
    ("IT", 0.7),
    ("Operations", 0.5),
];

/// Approval scorer with fixed weight tables
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct ApprovalScorer {
    type_weights: HashMap<&'static str, f64>,
    department_weights: HashMap<&'static str, f64>,
}

impl Default for ApprovalScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ApprovalScorer {
    pub fn new() -> Self {
        Self {
            type_weights: TYPE_WEIGHTS.iter().copied().collect(),
            department_weights: DEPARTMENT_WEIGHTS.iter().copied().collect(),
        }
    }

    /// Weight for a workflow type (exact match, neutral when unknown)
    pub fn type_weight(&self, workflow_type: &str) -> f64 {
        self.type_weights
            .get(workflow_type)
            .copied()
            .unwrap_or(NEUTRAL_WEIGHT)
    }

    /// Weight for a department (exact match, neutral when unknown)
    pub fn department_weight(&self, department: &str) -> f64 {
        self.department_weights
            .get(department)
            .copied()
            .unwrap_or(NEUTRAL_WEIGHT)
    }

    /// Score a workflow
    pub fn predict(&self, workflow_type: &str, department: &str, amount: f64) -> PredictionResult {
        let base = (self.type_weight(workflow_type) + self.department_weight(department)) / 2.0;
        let adjusted = base + amount_adjustment(amount);

        let approval_probability =
            round_to_hundredths(adjusted.clamp(MIN_PROBABILITY, MAX_PROBABILITY));

        PredictionResult {
            approval_probability,
            suggestion: suggestion_for(approval_probability),
            confidence: confidence_for(approval_probability),
        }
    }

    /// Score a workflow request (absent amount counts as 0)
    pub fn predict_request(&self, request: &WorkflowRequest) -> PredictionResult {
        self.predict(
            &request.workflow_type,
            &request.department,
            request.amount_or_zero(),
        )
    }
}

/// Amount-based adjustment to the base probability
///
/// The `> 10000` arm sits behind `> 5000` and can never match; large
/// amounts get the `-0.3` adjustment. Kept as-is pending a product decision.
pub fn amount_adjustment(amount: f64) -> f64 {
    if amount <= 0.0 {
        return 0.0;
    }

    if amount < 1000.0 {
        0.2
    } else if amount > 5000.0 {
        -0.3
    } else if amount > 10000.0 {
        -0.5
    } else {
        0.0
    }
}

/// Suggestion for a (rounded) approval probability
pub fn suggestion_for(probability: f64) -> Suggestion {
    if probability > APPROVE_THRESHOLD {
        Suggestion::Approve
    } else if probability > REVIEW_THRESHOLD {
        Suggestion::Review
    } else {
        Suggestion::Reject
    }
}

/// Confidence for a (rounded) approval probability
pub fn confidence_for(probability: f64) -> f64 {
    round_to_hundredths(0.85 + probability * 0.1)
}

/// Round half-up to two decimals on the decimal value
///
/// Binary noise such as `94.49999999999999` for 0.945 is snapped away
/// first, so 0.945 rounds to 0.95 and 0.865 to 0.87.
pub fn round_to_hundredths(value: f64) -> f64 {
    let scaled = ((value * 100.0) * 1e6).round() / 1e6;
    scaled.round() / 100.0
}
