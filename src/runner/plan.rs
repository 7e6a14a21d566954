//! Check planning
//!
//! Turns the scan options and the set of installed tools into the ordered
//! list of commands to run. Fixers always come before their matching
//! checker so a fix-then-verify run sees the rewritten files.

use std::fmt;
use std::path::Path;
use tracing::debug;

use super::exclusions::{ignored_paths, to_exclude_csv, to_exclude_regex};
use super::probe::ToolProbe;

/// External tools driven by a scan, in run order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Ruff,
    Black,
    Mypy,
    Bandit,
    Pytest,
}

impl Tool {
    /// Executable name looked up on `PATH`
    pub fn binary(&self) -> &'static str {
        match self {
            Self::Ruff => "ruff",
            Self::Black => "black",
            Self::Mypy => "mypy",
            Self::Bandit => "bandit",
            Self::Pytest => "pytest",
        }
    }

    /// Remediation shown when the tool is missing
    pub fn install_hint(&self) -> String {
        format!("python -m pip install {}", self)
    }

    /// Display name of the placeholder check emitted when the tool is missing
    pub fn missing_check_name(&self) -> String {
        format!("{} (missing)", self)
    }

    /// Resolve a tool from the first word of a check name
    pub fn from_check_name(name: &str) -> Option<Self> {
        let binary = name.split_whitespace().next()?;
        [
            Self::Ruff,
            Self::Black,
            Self::Mypy,
            Self::Bandit,
            Self::Pytest,
        ]
        .into_iter()
        .find(|t| t.binary() == binary)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}

/// Display-name prefix shared by every test-runner check
pub const TEST_RUNNER_PREFIX: &str = "pytest";

/// Flags that shape a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Run the auto-fixers before the checkers
    pub apply_fixes: bool,
    /// Leave the test runner out of the plan
    pub skip_tests: bool,
    /// Pass gitignored paths to the type checker and security scanner
    pub respect_gitignore: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            apply_fixes: false,
            skip_tests: false,
            respect_gitignore: true,
        }
    }
}

/// One planned check.
///
/// An empty command marks a tool that is not installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInvocation {
    pub name: String,
    pub command: Vec<String>,
}

impl CheckInvocation {
    /// Create an invocation from a display name and argv
    pub fn new(name: impl Into<String>, command: &[&str]) -> Self {
        Self {
            name: name.into(),
            command: command.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Placeholder for a tool that is not installed
    pub fn missing(tool: Tool) -> Self {
        Self {
            name: tool.missing_check_name(),
            command: Vec::new(),
        }
    }

    /// Check if this is a missing-tool placeholder
    pub fn is_missing(&self) -> bool {
        self.command.is_empty()
    }
}

/// Plan the checks for a repository.
///
/// Resolves gitignored paths first when `respect_gitignore` is set.
pub fn build_checks(
    repo_root: &Path,
    options: &ScanOptions,
    probe: &dyn ToolProbe,
) -> Vec<CheckInvocation> {
    let ignored = if options.respect_gitignore {
        ignored_paths(repo_root)
    } else {
        Vec::new()
    };

    plan_checks(options, probe, &ignored)
}

/// Plan the checks given an already resolved ignored-path list
pub fn plan_checks(
    options: &ScanOptions,
    probe: &dyn ToolProbe,
    ignored: &[String],
) -> Vec<CheckInvocation> {
    let mut checks = Vec::new();

    if probe.tool_exists(Tool::Ruff.binary()) {
        if options.apply_fixes {
            checks.push(CheckInvocation::new(
                "ruff (auto-fix)",
                &["ruff", "check", ".", "--fix"],
            ));
        }
        checks.push(CheckInvocation::new("ruff (lint)", &["ruff", "check", "."]));
    } else {
        checks.push(CheckInvocation::missing(Tool::Ruff));
    }

    if probe.tool_exists(Tool::Black.binary()) {
        if options.apply_fixes {
            checks.push(CheckInvocation::new("black (format)", &["black", "."]));
        }
        checks.push(CheckInvocation::new(
            "black (check)",
            &["black", ".", "--check"],
        ));
    } else {
        checks.push(CheckInvocation::missing(Tool::Black));
    }

    if probe.tool_exists(Tool::Mypy.binary()) {
        let exclude;
        let mut command = vec!["mypy", ".", "--pretty", "--show-error-codes"];
        if options.respect_gitignore {
            exclude = to_exclude_regex(ignored);
            command.extend(["--exclude", exclude.as_str()]);
        }
        checks.push(CheckInvocation::new("mypy (types)", &command));
    } else {
        checks.push(CheckInvocation::missing(Tool::Mypy));
    }

    if probe.tool_exists(Tool::Bandit.binary()) {
        let exclude;
        let mut command = vec!["bandit", "-r", "."];
        if options.respect_gitignore {
            exclude = to_exclude_csv(ignored);
            command.extend(["-x", exclude.as_str()]);
        }
        checks.push(CheckInvocation::new("bandit (security)", &command));
    } else {
        checks.push(CheckInvocation::missing(Tool::Bandit));
    }

    if !options.skip_tests {
        if probe.tool_exists(Tool::Pytest.binary()) {
            checks.push(CheckInvocation::new("pytest (tests)", &["pytest", "-q"]));
        } else {
            checks.push(CheckInvocation::missing(Tool::Pytest));
        }
    }

    debug!(
        count = checks.len(),
        names = ?checks.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
        "planned checks"
    );

    checks
}
