//! Analytics fixture generator
//!
//! Produces a fixed analytics payload so the dashboard can render charts
//! without a live data source. Every literal here is fixture data; the
//! payload is rebuilt on every call and is identical each time.

use serde::Serialize;

/// Departments shown on department charts
pub const DEPARTMENTS: [&str; 7] = [
    "Engineering",
    "Finance",
    "HR",
    "IT",
    "Operations",
    "Marketing",
    "Sales",
];

/// Workflow types shown on the type chart
pub const WORKFLOW_TYPES: [&str; 6] = ["LEAVE", "PURCHASE", "BUDGET", "PROJECT", "TRAVEL", "EXPENSE"];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const AMOUNT_RANGES: [&str; 5] = ["$0-500", "$501-2000", "$2001-5000", "$5001-10000", "$10001+"];

/// Complete analytics response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsPayload {
    pub summary: AnalyticsSummary,
    pub charts: Charts,
    pub trends: Trends,
}

/// Headline metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_workflows: u32,
    pub pending_workflows: u32,
    pub approved_workflows: u32,
    pub rejected_workflows: u32,
    pub approval_rate: u32,
    pub avg_processing_time: String,
    pub total_amount_processed: u64,
}

/// Chart blocks keyed by chart name
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Charts {
    pub status_distribution: ChartData,
    pub department_workflows: ChartData,
    pub type_distribution: ChartData,
    pub monthly_trends: ChartData,
    pub approval_by_department: ChartData,
    pub amount_distribution: ChartData,
}

/// Labels plus one or more datasets, in the shape chart libraries expect
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<u32>,
    pub background_color: Colors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

/// A single color for the whole dataset or one color per data point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Colors {
    Single(String),
    PerPoint(Vec<String>),
}

/// Trend blocks keyed by trend name
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trends {
    pub weekly_comparison: WeeklyComparison,
    pub top_performers: Vec<TopPerformer>,
    pub efficiency_metrics: EfficiencyMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyComparison {
    pub current_week: u32,
    pub previous_week: u32,
    pub change: String,
    pub is_positive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPerformer {
    pub department: String,
    pub approval_rate: u32,
    pub processing_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyMetrics {
    pub avg_response_time: String,
    pub sla_compliance: u32,
    pub automation_rate: u32,
    pub user_satisfaction: f64,
}

/// Builds the analytics fixture payload
#[derive(Debug, Clone, Default)]
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Build the full analytics payload
    pub fn generate(&self) -> AnalyticsPayload {
        AnalyticsPayload {
            summary: AnalyticsSummary {
                total_workflows: 156,
                pending_workflows: 23,
                approved_workflows: 98,
                rejected_workflows: 35,
                approval_rate: 63,
                avg_processing_time: "2.3 days".to_string(),
                total_amount_processed: 452_800,
            },
            charts: Charts {
                status_distribution: status_chart(),
                department_workflows: department_chart(),
                type_distribution: type_chart(),
                monthly_trends: monthly_trend_chart(),
                approval_by_department: approval_by_department_chart(),
                amount_distribution: amount_chart(),
            },
            trends: Trends {
                weekly_comparison: WeeklyComparison {
                    current_week: 45,
                    previous_week: 38,
                    change: "+18%".to_string(),
                    is_positive: true,
                },
                top_performers: vec![
                    top_performer("HR", 82, "1.2 days"),
                    top_performer("Engineering", 78, "1.8 days"),
                    top_performer("IT", 71, "2.1 days"),
                ],
                efficiency_metrics: EfficiencyMetrics {
                    avg_response_time: "6.2 hours".to_string(),
                    sla_compliance: 94,
                    automation_rate: 67,
                    user_satisfaction: 4.2,
                },
            },
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn top_performer(department: &str, approval_rate: u32, processing_time: &str) -> TopPerformer {
    TopPerformer {
        department: department.to_string(),
        approval_rate,
        processing_time: processing_time.to_string(),
    }
}

fn status_chart() -> ChartData {
    ChartData {
        labels: strings(&["Approved", "Pending", "Rejected", "Under Review"]),
        datasets: vec![Dataset {
            label: None,
            data: vec![98, 23, 35, 12],
            background_color: Colors::PerPoint(strings(&[
                "#10b981", "#f59e0b", "#ef4444", "#3b82f6",
            ])),
            border_color: Some("#ffffff".to_string()),
            border_width: Some(2),
            fill: None,
            tension: None,
        }],
    }
}

fn department_chart() -> ChartData {
    ChartData {
        labels: strings(&DEPARTMENTS),
        datasets: vec![Dataset {
            label: Some("Workflows by Department".to_string()),
            data: vec![45, 32, 28, 25, 18, 15, 13],
            background_color: Colors::PerPoint(strings(&[
                "#3b82f6", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6", "#06b6d4", "#f97316",
            ])),
            border_color: None,
            border_width: Some(1),
            fill: None,
            tension: None,
        }],
    }
}

fn type_chart() -> ChartData {
    ChartData {
        labels: strings(&WORKFLOW_TYPES),
        datasets: vec![Dataset {
            label: Some("Workflows by Type".to_string()),
            data: vec![42, 38, 35, 25, 12, 4],
            background_color: Colors::Single("#3b82f6".to_string()),
            border_color: Some("#1d4ed8".to_string()),
            border_width: Some(2),
            fill: None,
            tension: None,
        }],
    }
}

fn monthly_trend_chart() -> ChartData {
    let line = |label: &str, data: Vec<u32>, color: &str, fill: &str| Dataset {
        label: Some(label.to_string()),
        data,
        background_color: Colors::Single(fill.to_string()),
        border_color: Some(color.to_string()),
        border_width: None,
        fill: Some(true),
        tension: Some(0.4),
    };

    ChartData {
        labels: strings(&MONTHS),
        datasets: vec![
            line(
                "Approved",
                vec![45, 52, 48, 61, 55, 58, 62, 65, 59, 63, 67, 71],
                "#10b981",
                "rgba(16, 185, 129, 0.1)",
            ),
            line(
                "Rejected",
                vec![12, 15, 18, 14, 16, 13, 11, 9, 12, 10, 8, 6],
                "#ef4444",
                "rgba(239, 68, 68, 0.1)",
            ),
        ],
    }
}

fn approval_by_department_chart() -> ChartData {
    ChartData {
        labels: strings(&DEPARTMENTS[..5]),
        datasets: vec![Dataset {
            label: Some("Approval Rate (%)".to_string()),
            data: vec![78, 65, 82, 71, 60],
            background_color: Colors::PerPoint(strings(&[
                "rgba(59, 130, 246, 0.8)",
                "rgba(16, 185, 129, 0.8)",
                "rgba(245, 158, 11, 0.8)",
                "rgba(139, 92, 246, 0.8)",
                "rgba(6, 182, 212, 0.8)",
            ])),
            border_color: None,
            border_width: Some(1),
            fill: None,
            tension: None,
        }],
    }
}

fn amount_chart() -> ChartData {
    ChartData {
        labels: strings(&AMOUNT_RANGES),
        datasets: vec![Dataset {
            label: Some("Workflows by Amount".to_string()),
            data: vec![45, 38, 42, 25, 6],
            background_color: Colors::Single("rgba(59, 130, 246, 0.7)".to_string()),
            border_color: Some("#1d4ed8".to_string()),
            border_width: Some(2),
            fill: None,
            tension: None,
        }],
    }
}
