//! JSON rendering of the same records the terminal renderer consumes.

use std::error::Error;

use crate::models::SubnetReport;
use crate::processing::CheckReport;

/// Serialize display-mode records as a pretty-printed JSON array.
pub fn render_subnet_reports(reports: &[SubnetReport]) -> Result<String, Box<dyn Error>> {
    Ok(serde_json::to_string_pretty(reports)?)
}

/// Serialize a check-mode report as pretty-printed JSON.
pub fn render_check_report(report: &CheckReport) -> Result<String, Box<dyn Error>> {
    Ok(serde_json::to_string_pretty(report)?)
}
