//! Configuration module
//!
//! The user config file supplies defaults; command-line flags override them.
//! [`Config::merge`] is the single place that precedence is decided.

pub mod loader;

pub use loader::{default_config_path, resolve_config_path, CONFIG_ENV};

use serde::{Deserialize, Serialize};

use crate::runner::ScanOptions;
use crate::storage::DEFAULT_REPORT_DIR;

/// Effective scan configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Run ruff --fix and black before checking
    #[serde(default)]
    pub apply_fixes: bool,

    /// Do not run pytest
    #[serde(default)]
    pub skip_tests: bool,

    /// Exclude gitignored paths from mypy and bandit
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,

    /// Report directory, relative to the repository root
    #[serde(default = "default_report_dir")]
    pub report_dir: String,
}

fn default_true() -> bool {
    true
}

fn default_report_dir() -> String {
    DEFAULT_REPORT_DIR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            apply_fixes: false,
            skip_tests: false,
            respect_gitignore: true,
            report_dir: default_report_dir(),
        }
    }
}

/// Values given on the command line; `None` means "not given"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub apply_fixes: Option<bool>,
    pub skip_tests: Option<bool>,
    pub respect_gitignore: Option<bool>,
    pub report_dir: Option<String>,
}

impl Config {
    /// Combine file defaults with command-line overrides. Overrides win.
    pub fn merge(file: Config, overrides: CliOverrides) -> Config {
        Config {
            apply_fixes: overrides.apply_fixes.unwrap_or(file.apply_fixes),
            skip_tests: overrides.skip_tests.unwrap_or(file.skip_tests),
            respect_gitignore: overrides
                .respect_gitignore
                .unwrap_or(file.respect_gitignore),
            report_dir: overrides.report_dir.unwrap_or(file.report_dir),
        }
    }

    /// Flags consumed by the check runner
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            apply_fixes: self.apply_fixes,
            skip_tests: self.skip_tests,
            respect_gitignore: self.respect_gitignore,
        }
    }
}
