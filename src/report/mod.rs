//! # Scan Report Structures
//!
//! This module defines the data structures for representing the outcome of a
//! scan and renders them to the plain-text report format.
//!
//! ## Overview
//!
//! - [`CheckStatus`] - Tri-state outcome (Pass, Warn, Fail), ordered by severity
//! - [`CheckResult`] - Outcome of one planned check
//! - [`ScanReport`] - All results of one scan, with summary and detail rendering
//!
//! ## Examples
//!
//! ```rust
//! use codedoctor::report::{CheckResult, CheckStatus, ScanReport};
//!
//! let report = ScanReport::new(
//!     "/work/project",
//!     vec![
//!         CheckResult::new("ruff (lint)", vec!["ruff".into(), "check".into(), ".".into()], 0, "", CheckStatus::Pass),
//!         CheckResult::new("mypy (types)", vec!["mypy".into(), ".".into()], 1, "error: boom", CheckStatus::Fail),
//!     ],
//! );
//!
//! assert_eq!(report.overall_status(), CheckStatus::Fail);
//! assert_eq!(report.exit_code(), 2);
//! assert!(report.to_tldr().contains("Failures:"));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cli::exit_codes;

/// Outcome of a single check.
///
/// Variants are declared in increasing severity so that the derived ordering
/// gives `Pass < Warn < Fail`; the overall status of a report is the maximum
/// over its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    /// The tool exited cleanly.
    Pass,
    /// The tool exited cleanly but printed teardown noise worth looking at.
    Warn,
    /// The tool failed or is not installed.
    Fail,
}

impl CheckStatus {
    /// Label used in the text report
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Warn => "WARN",
            Self::Fail => "FAIL",
        }
    }

    /// Process exit code for a scan whose overall status is `self`
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Pass => exit_codes::SUCCESS,
            Self::Warn => exit_codes::WARNINGS,
            Self::Fail => exit_codes::FAILURES,
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one planned check, executed or resolved as a missing tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Display name, e.g. `"ruff (lint)"`
    pub name: String,

    /// Command line that was run; empty when the tool was missing
    pub command: Vec<String>,

    /// Exit code of the process (127 for a missing tool, -1 when killed by a signal)
    pub exit_code: i32,

    /// Trimmed stdout followed by stderr
    pub output: String,

    /// Classified status
    pub status: CheckStatus,
}

impl CheckResult {
    /// Create a new result
    pub fn new(
        name: impl Into<String>,
        command: Vec<String>,
        exit_code: i32,
        output: impl Into<String>,
        status: CheckStatus,
    ) -> Self {
        Self {
            name: name.into(),
            command,
            exit_code,
            output: output.into(),
            status,
        }
    }

    /// Whether this result does not block the scan (Pass or Warn)
    pub fn ok(&self) -> bool {
        self.status != CheckStatus::Fail
    }
}

/// Results of one scan of a repository.
///
/// All summary values are recomputed from `results` on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Absolute path of the scanned repository
    pub repo: String,

    /// Results in planned order
    pub results: Vec<CheckResult>,
}

impl ScanReport {
    /// Create a new report
    pub fn new(repo: impl Into<String>, results: Vec<CheckResult>) -> Self {
        Self {
            repo: repo.into(),
            results,
        }
    }

    /// True when no result failed
    pub fn ok(&self) -> bool {
        self.results.iter().all(CheckResult::ok)
    }

    /// Check if any result failed
    pub fn has_failures(&self) -> bool {
        self.results.iter().any(|r| r.status == CheckStatus::Fail)
    }

    /// Check if any result warned
    pub fn has_warnings(&self) -> bool {
        self.results.iter().any(|r| r.status == CheckStatus::Warn)
    }

    /// Most severe status among the results, `Pass` for an empty report
    pub fn overall_status(&self) -> CheckStatus {
        self.results
            .iter()
            .map(|r| r.status)
            .max()
            .unwrap_or(CheckStatus::Pass)
    }

    /// Process exit code: 0 pass, 1 warn, 2 fail
    pub fn exit_code(&self) -> i32 {
        self.overall_status().exit_code()
    }

    /// Count results with the given status
    pub fn count_by_status(&self, status: CheckStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }

    /// Get results with the given status
    pub fn results_by_status(&self, status: CheckStatus) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(move |r| r.status == status)
    }

    /// Short summary: overall status, counts and the names of failing and warning checks.
    pub fn to_tldr(&self) -> String {
        let passed = self.count_by_status(CheckStatus::Pass);
        let warned = self.count_by_status(CheckStatus::Warn);
        let failed = self.count_by_status(CheckStatus::Fail);

        let mut lines: Vec<String> = vec![
            "CodeDoctor Report TL;DR".to_string(),
            "----------------------".to_string(),
            format!("Overall: {}", self.overall_status()),
            format!(
                "Checks:  {} passed / {} warned / {} failed / {} total",
                passed,
                warned,
                failed,
                self.results.len()
            ),
            String::new(),
        ];

        if failed > 0 {
            lines.push("Failures:".to_string());
            lines.extend(
                self.results_by_status(CheckStatus::Fail)
                    .map(|r| format!(" - {}", r.name)),
            );
            lines.push(String::new());
        }

        if warned > 0 {
            lines.push("Warnings:".to_string());
            lines.extend(
                self.results_by_status(CheckStatus::Warn)
                    .map(|r| format!(" - {}", r.name)),
            );
            lines.push(String::new());
        }

        lines.join("\n")
    }

    /// Full report: the TL;DR block followed by every check's command and output.
    ///
    /// This is the text written to the report files.
    pub fn to_full_text(&self) -> String {
        let mut lines: Vec<String> = vec![
            self.to_tldr(),
            format!("Repository: {}", self.repo),
            String::new(),
            "Details".to_string(),
            "-------".to_string(),
            String::new(),
        ];

        for result in &self.results {
            lines.push(format!("== {} : {} ==", result.name, result.status));
            if !result.command.is_empty() {
                lines.push(format!("$ {}", result.command.join(" ")));
            }
            if result.output.is_empty() {
                lines.push("(no output)".to_string());
            } else {
                lines.push(result.output.clone());
            }
            lines.push(String::new());
        }

        lines.push("Next steps:".to_string());
        lines.push(" - Re-run with safe auto-fixes: codedoctor scan . --fix".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}
