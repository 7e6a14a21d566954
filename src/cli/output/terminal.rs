//! Plain-text report output and the colored status line

use colored::Colorize;

use super::ReportRenderer;
use crate::error::CodeDoctorError;
use crate::report::{CheckStatus, ScanReport};

/// Prints the same text that is written to the report files
pub struct TextOutput;

impl TextOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for TextOutput {
    fn render_report(&self, report: &ScanReport) -> Result<String, CodeDoctorError> {
        Ok(report.to_full_text())
    }
}

/// One-line colored verdict for the terminal
pub fn status_line(report: &ScanReport, elapsed: &str) -> String {
    let label = match report.overall_status() {
        CheckStatus::Pass => "✓ PASS".green().bold(),
        CheckStatus::Warn => "! WARN".yellow().bold(),
        CheckStatus::Fail => "✗ FAIL".red().bold(),
    };

    format!(
        "{} {} passed, {} warned, {} failed {}",
        label,
        report.count_by_status(CheckStatus::Pass),
        report.count_by_status(CheckStatus::Warn),
        report.count_by_status(CheckStatus::Fail),
        format!("({})", elapsed).dimmed()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::CheckResult;

    fn report(status: CheckStatus) -> ScanReport {
        ScanReport::new(
            "/repo",
            vec![CheckResult::new("black (check)", vec![], 0, "", status)],
        )
    }

    #[test]
    fn test_text_output_is_full_text() {
        let report = report(CheckStatus::Pass);
        let rendered = TextOutput::new().render_report(&report).unwrap();
        assert_eq!(rendered, report.to_full_text());
    }

    #[test]
    fn test_status_line_counts() {
        colored::control::set_override(false);
        let line = status_line(&report(CheckStatus::Fail), "12ms");
        assert_eq!(line, "✗ FAIL 0 passed, 0 warned, 1 failed (12ms)");
    }
}
