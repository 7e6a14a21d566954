//! CLI commands module

pub mod generate_man;
pub mod init;
pub mod scan;

use clap::Args;
use std::path::PathBuf;

use crate::config::CliOverrides;

/// Flags that override the configuration file
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigFlags {
    /// Apply safe auto-fixes (ruff --fix, black) before checking
    #[arg(long)]
    pub fix: bool,

    /// Do not apply auto-fixes
    #[arg(long, conflicts_with = "fix")]
    pub no_fix: bool,

    /// Skip running pytest
    #[arg(long)]
    pub skip_tests: bool,

    /// Run pytest even if the config skips it
    #[arg(long, conflicts_with = "skip_tests")]
    pub run_tests: bool,

    /// Exclude gitignored paths from mypy and bandit
    #[arg(long)]
    pub respect_gitignore: bool,

    /// Do not exclude gitignored paths
    #[arg(long, conflicts_with = "respect_gitignore")]
    pub no_respect_gitignore: bool,

    /// Directory (relative to the repository) to store reports
    #[arg(long, value_name = "DIR")]
    pub report_dir: Option<String>,
}

impl ConfigFlags {
    /// Only flags that were actually given become overrides
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            apply_fixes: flag_pair(self.fix, self.no_fix),
            skip_tests: flag_pair(self.skip_tests, self.run_tests),
            respect_gitignore: flag_pair(self.respect_gitignore, self.no_respect_gitignore),
            report_dir: self.report_dir.clone(),
        }
    }
}

fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Repository path
    #[arg(default_value = ".")]
    pub path: PathBuf,

    #[command(flatten)]
    pub flags: ConfigFlags,

    /// Output format for stdout (report files are always text)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

impl ScanArgs {
    pub fn overrides(&self) -> CliOverrides {
        self.flags.overrides()
    }
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    #[command(flatten)]
    pub flags: ConfigFlags,
}

/// Arguments for the generate-man command
#[derive(Args, Debug)]
pub struct GenerateManArgs {
    /// Output directory for the man page
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,
}

/// Output format for the scan command
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_pair() {
        assert_eq!(flag_pair(true, false), Some(true));
        assert_eq!(flag_pair(false, true), Some(false));
        assert_eq!(flag_pair(false, false), None);
    }

    #[test]
    fn test_empty_flags_override_nothing() {
        assert_eq!(ConfigFlags::default().overrides(), CliOverrides::default());
    }
}
