//! JSON output formatting

use serde::Serialize;

use super::ReportRenderer;
use crate::error::{CodeDoctorError, ReportError};
use crate::report::{CheckResult, CheckStatus, ScanReport};

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    version: &'static str,
    repository: &'a str,
    overall_status: CheckStatus,
    exit_code: i32,
    summary: Summary,
    results: &'a [CheckResult],
}

#[derive(Serialize)]
struct Summary {
    passed: usize,
    warned: usize,
    failed: usize,
    total: usize,
}

impl ReportRenderer for JsonOutput {
    fn render_report(&self, report: &ScanReport) -> Result<String, CodeDoctorError> {
        let output = ReportOutput {
            version: env!("CARGO_PKG_VERSION"),
            repository: &report.repo,
            overall_status: report.overall_status(),
            exit_code: report.exit_code(),
            summary: Summary {
                passed: report.count_by_status(CheckStatus::Pass),
                warned: report.count_by_status(CheckStatus::Warn),
                failed: report.count_by_status(CheckStatus::Fail),
                total: report.results.len(),
            },
            results: &report.results,
        };

        serde_json::to_string_pretty(&output).map_err(|e| ReportError::Json(e).into())
    }
}
