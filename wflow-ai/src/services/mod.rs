//! Scoring, analytics and summary services
//!
//! All three are pure computations over read-only data.

pub mod analytics;
pub mod approval_scorer;
pub mod summary;

pub use analytics::{AnalyticsPayload, AnalyticsService};
pub use approval_scorer::ApprovalScorer;
pub use summary::summarize;
