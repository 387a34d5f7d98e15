//! Human-readable workflow summary

use crate::models::WorkflowRequest;

/// Amounts above this are flagged as high priority
pub const HIGH_PRIORITY_AMOUNT: f64 = 5000.0;

/// Amounts below this are recommended for approval
pub const AUTO_APPROVE_AMOUNT: f64 = 2000.0;

/// Fixed approval rate quoted in every summary
pub const TYPICAL_APPROVAL_RATE: &str = "75%";

const INDENT: &str = "    ";

/// Build the multi-line summary text for a workflow request
pub fn summarize(request: &WorkflowRequest) -> String {
    let amount = request.amount_or_zero();

    // The separator line keeps its indentation; only the ends are trimmed.
    let lines = [
        "Workflow Analysis:".to_string(),
        format!("{INDENT}- Title: {}", request.title),
        format!("{INDENT}- Type: {}", request.workflow_type),
        format!("{INDENT}- Department: {}", request.department),
        format!("{INDENT}- Amount: ${}", format_amount(amount)),
        INDENT.to_string(),
        format!("{INDENT}Key Insights:"),
        format!(
            "{INDENT}• This is a {} request from {} department",
            request.workflow_type.to_lowercase(),
            request.department
        ),
        format!("{INDENT}• {} priority based on amount", priority_label(amount)),
        format!("{INDENT}• Typical approval rate for similar workflows: {TYPICAL_APPROVAL_RATE}"),
        format!("{INDENT}• Recommended action: {}", recommended_action(amount)),
    ];

    lines.join("\n").trim().to_string()
}

/// "High" above the high-priority threshold, otherwise "Normal"
pub fn priority_label(amount: f64) -> &'static str {
    if amount > HIGH_PRIORITY_AMOUNT {
        "High"
    } else {
        "Normal"
    }
}

/// "Approve" below the auto-approve threshold, otherwise "Review carefully"
pub fn recommended_action(amount: f64) -> &'static str {
    if amount < AUTO_APPROVE_AMOUNT {
        "Approve"
    } else {
        "Review carefully"
    }
}

/// Format with thousands separators and two decimals (`1234.5` -> `1,234.50`)
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{cents}")
}
