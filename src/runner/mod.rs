//! # Check Runner
//!
//! Orchestrates a scan: plans the checks for the installed tools, runs them
//! one at a time in the repository root, and collects the results into a
//! [`ScanReport`].
//!
//! Checks run sequentially. Fixers rewrite files in place and the checkers
//! that follow must observe those rewrites.
//!
//! ## Submodules
//!
//! - [`probe`] - Tool availability lookup
//! - [`exclusions`] - Gitignored paths and their tool-specific renderings
//! - [`plan`] - Ordered check planning
//! - [`executor`] - Child process execution and output capture
//! - [`classify`] - Exit code and output to status mapping

pub mod classify;
pub mod exclusions;
pub mod executor;
pub mod plan;
pub mod probe;

use std::path::Path;
use tracing::info;

use crate::report::{CheckResult, CheckStatus, ScanReport};
use crate::utils::timing::Timer;

pub use classify::classify;
pub use exclusions::{ignored_paths, to_exclude_csv, to_exclude_regex};
pub use executor::{run_command, NOT_FOUND_EXIT_CODE};
pub use plan::{build_checks, plan_checks, CheckInvocation, ScanOptions, Tool};
pub use probe::{tool_exists, PathProbe, ToolProbe};

/// Scan a repository with the tools found on `PATH`
pub fn scan_repo(repo_root: &Path, options: &ScanOptions) -> ScanReport {
    scan_repo_with(repo_root, options, &PathProbe, |_, _, _| {})
}

/// Scan a repository.
///
/// `on_check` is called before each check with the invocation, its 1-based
/// position and the number of planned checks. Every planned check yields
/// exactly one result.
pub fn scan_repo_with<F>(
    repo_root: &Path,
    options: &ScanOptions,
    probe: &dyn ToolProbe,
    mut on_check: F,
) -> ScanReport
where
    F: FnMut(&CheckInvocation, usize, usize),
{
    let timer = Timer::start();
    info!(repo = %repo_root.display(), ?options, "starting scan");

    let checks = build_checks(repo_root, options, probe);
    let total = checks.len();

    let results: Vec<CheckResult> = checks
        .iter()
        .enumerate()
        .map(|(i, check)| {
            on_check(check, i + 1, total);
            if check.is_missing() {
                missing_tool_result(&check.name)
            } else {
                run_command(&check.name, &check.command, repo_root)
            }
        })
        .collect();

    let report = ScanReport::new(repo_root.display().to_string(), results);
    info!(
        status = %report.overall_status(),
        checks = total,
        elapsed = %timer.elapsed_formatted(),
        "scan finished"
    );

    report
}

/// Failing result for a tool that is not installed
pub fn missing_tool_result(name: &str) -> CheckResult {
    let tool = name.split_whitespace().next().unwrap_or(name);
    let hint = Tool::from_check_name(name)
        .map(|t| t.install_hint())
        .unwrap_or_else(|| format!("python -m pip install {}", tool));

    CheckResult::new(
        name,
        Vec::new(),
        NOT_FOUND_EXIT_CODE,
        format!(
            "{} is not installed or not on PATH.\nInstall it with: {}",
            tool, hint
        ),
        CheckStatus::Fail,
    )
}
