//! Report persistence and rotation
//!
//! Layout under `<repo>/<report_dir>`:
//!
//! | File | Content |
//! |------|---------|
//! | `report-latest.txt` | Most recent report |
//! | `report-prev.txt` | The report that was latest before the current one |
//! | `report-YYYYMMDD-HHMMSS.txt` | Immutable per-run snapshot (UTC) |
//!
//! Rotation is a remove-then-rename and is not atomic across crashes.

use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::ReportError;

/// Default report directory, relative to the repository root
pub const DEFAULT_REPORT_DIR: &str = ".codedoctor";

const LATEST_FILE_NAME: &str = "report-latest.txt";
const PREVIOUS_FILE_NAME: &str = "report-prev.txt";
const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Locations of the report files for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub directory: PathBuf,
    pub latest: PathBuf,
    pub previous: PathBuf,
    pub timestamped: PathBuf,
}

impl ReportPaths {
    /// Derive the paths for a run started at `at`
    pub fn new(repo_root: &Path, report_dir: &str, at: DateTime<Utc>) -> Self {
        let directory = repo_root.join(report_dir);
        let timestamped = directory.join(format!("report-{}.txt", at.format(TIMESTAMP_FORMAT)));

        Self {
            latest: directory.join(LATEST_FILE_NAME),
            previous: directory.join(PREVIOUS_FILE_NAME),
            timestamped,
            directory,
        }
    }

    /// Derive the paths for a run starting now
    pub fn now(repo_root: &Path, report_dir: &str) -> Self {
        Self::new(repo_root, report_dir, Utc::now())
    }
}

/// Move `latest` into the `previous` slot, replacing any older previous report.
///
/// Returns `false` when there was no latest report to rotate.
pub fn rotate_latest_to_previous(latest: &Path, previous: &Path) -> Result<bool, ReportError> {
    if !latest.exists() {
        return Ok(false);
    }

    let rotate_err = |source| ReportError::Rotate {
        from: latest.display().to_string(),
        to: previous.display().to_string(),
        source,
    };

    if let Some(parent) = previous.parent() {
        fs::create_dir_all(parent).map_err(rotate_err)?;
    }
    if previous.exists() {
        fs::remove_file(previous).map_err(rotate_err)?;
    }
    fs::rename(latest, previous).map_err(rotate_err)?;

    debug!(from = %latest.display(), to = %previous.display(), "rotated report");
    Ok(true)
}

/// Persist a rendered report: rotate, then write the latest and the snapshot.
pub fn save_report(paths: &ReportPaths, text: &str) -> Result<(), ReportError> {
    fs::create_dir_all(&paths.directory).map_err(|e| ReportError::CreateDir {
        path: paths.directory.display().to_string(),
        source: e,
    })?;

    rotate_latest_to_previous(&paths.latest, &paths.previous)?;

    for path in [&paths.latest, &paths.timestamped] {
        fs::write(path, text).map_err(|e| ReportError::FileWrite {
            path: path.display().to_string(),
            source: e,
        })?;
    }

    info!(latest = %paths.latest.display(), snapshot = %paths.timestamped.display(), "report saved");
    Ok(())
}
