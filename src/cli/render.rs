//! Plain-text rendering of receipts and the daily report. Pure line
//! builders; the menu layer decides where the lines are written.

use crate::billing::{BillingEntry, DailyReport, StudyType};
use crate::currency::format_amount;

const RECEIPT_RULE: &str = "========================================";
const REPORT_RULE: &str = "==================================================";

pub fn receipt_lines(entry: &BillingEntry) -> Vec<String> {
    vec![
        RECEIPT_RULE.to_string(),
        "RECEIPT - RADIOLOGY UNIT".to_string(),
        RECEIPT_RULE.to_string(),
        format!("Receipt no: {}", entry.id),
        format!("Identity document: {}", entry.identity_id),
        format!("Age: {} years", entry.age),
        format!("Sex: {}", entry.sex),
        format!("Study type: {}", entry.study_type),
        format!("Insured: {}", if entry.has_insurance { "yes" } else { "no" }),
        format!("Net amount due: {}", format_amount(entry.net_amount)),
        RECEIPT_RULE.to_string(),
    ]
}

pub fn report_lines(report: &DailyReport) -> Vec<String> {
    let mut lines = vec![
        REPORT_RULE.to_string(),
        "DAILY REPORT - RADIOLOGY UNIT".to_string(),
        REPORT_RULE.to_string(),
        "Clients per study type:".to_string(),
    ];
    for study in StudyType::ALL {
        let count = report.study_counts.get(&study).copied().unwrap_or(0);
        lines.push(format!("- {}: {} client(s)", study, count));
    }
    lines.push(format!(
        "Total net amount billed: {}",
        format_amount(report.total_net_amount)
    ));
    lines.push(REPORT_RULE.to_string());
    lines
}
