//! Output formatting module for CLI

pub mod json;
mod terminal;

pub use json::JsonOutput;
pub use terminal::{status_line, TextOutput};

use crate::error::CodeDoctorError;
use crate::report::ScanReport;

/// Trait for rendering a scan report to stdout
pub trait ReportRenderer {
    fn render_report(&self, report: &ScanReport) -> Result<String, CodeDoctorError>;
}
