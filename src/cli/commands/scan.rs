//! Scan command - Run the checks and write the report
//!
//! Resolves the repository, merges the config file with the command-line
//! flags, runs every planned check in order, then rotates and writes the
//! report files before printing the report.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use super::{OutputFormat, ScanArgs};
use crate::cli::output::{status_line, JsonOutput, ReportRenderer, TextOutput};
use crate::config::{resolve_config_path, Config};
use crate::error::{CodeDoctorError, ScanError};
use crate::runner::{scan_repo_with, PathProbe};
use crate::storage::{save_report, ReportPaths};
use crate::utils::timing::Timer;

/// Execute the scan command
///
/// # Returns
///
/// The report's exit code: 0 all passed, 1 warnings only, 2 failures
///
/// # Errors
///
/// Returns an error if the repository path is invalid, the config file is
/// malformed, or the report cannot be written
pub async fn execute(args: ScanArgs, config_path: Option<&Path>) -> Result<i32, CodeDoctorError> {
    let repo_root = resolve_repo(&args.path)?;

    let config_path = resolve_config_path(config_path)?;
    let config = Config::merge(Config::load_or_default(&config_path)?, args.overrides());
    debug!(?config, "effective configuration");

    let timer = Timer::start();
    let spinner = new_spinner();
    let report = scan_repo_with(
        &repo_root,
        &config.scan_options(),
        &PathProbe,
        |check, current, total| {
            spinner.set_message(format!("{} ({}/{})", check.name, current, total));
        },
    );
    spinner.finish_and_clear();

    let paths = ReportPaths::now(&repo_root, &config.report_dir);
    save_report(&paths, &report.to_full_text())?;

    let renderer: Box<dyn ReportRenderer> = match args.format {
        OutputFormat::Text => Box::new(TextOutput::new()),
        OutputFormat::Json => Box::new(JsonOutput::new()),
    };
    println!("{}", renderer.render_report(&report)?);

    eprintln!();
    eprintln!("{}", status_line(&report, &timer.elapsed_formatted()));
    eprintln!("Wrote: {}", paths.latest.display().to_string().cyan());
    eprintln!("Wrote: {}", paths.timestamped.display().to_string().cyan());
    if paths.previous.exists() {
        eprintln!("Previous: {}", paths.previous.display());
    }

    Ok(report.exit_code())
}

/// Absolute path of an existing directory
fn resolve_repo(path: &Path) -> Result<PathBuf, ScanError> {
    let resolved = path.canonicalize().map_err(|e| ScanError::RepoNotFound {
        path: path.display().to_string(),
        source: e,
    })?;

    if !resolved.is_dir() {
        return Err(ScanError::NotADirectory {
            path: resolved.display().to_string(),
        });
    }

    Ok(resolved)
}

fn new_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} Running {msg}") {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
