//! Gitignore-aware exclusion lists
//!
//! Resolves the paths git ignores in a repository and renders them in the two
//! syntaxes the checkers accept: a regex for mypy's `--exclude` and a
//! comma-separated list for bandit's `-x`.
//!
//! Resolution is best effort. Any failure yields an empty list and the scan
//! goes on with the built-in seed directories only.

use std::collections::HashSet;
use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};

/// Build, cache and VCS directories that are always excluded
pub const SEED_EXCLUDES: &[&str] = &[
    ".git",
    ".venv",
    "venv",
    "__pycache__",
    "build",
    "dist",
    ".mypy_cache",
    ".pytest_cache",
    ".ruff_cache",
    ".tox",
];

/// Extra seed for the security scanner, which should not flag test code
pub const TESTS_DIR: &str = "tests";

/// Check if the directory is the root of a git repository
pub fn is_git_repository(root: &Path) -> bool {
    root.join(".git").exists()
}

/// List the repository-relative paths that git ignores.
///
/// Returns an empty list when the directory is not a git repository, git is
/// not installed, or the query fails.
pub fn ignored_paths(repo_root: &Path) -> Vec<String> {
    let Ok(git) = which::which("git") else {
        debug!("git not found on PATH; no ignored paths");
        return Vec::new();
    };

    if !is_git_repository(repo_root) {
        debug!(repo = %repo_root.display(), "not a git repository; no ignored paths");
        return Vec::new();
    }

    let output = match Command::new(git)
        .args(["ls-files", "-ci", "--exclude-standard"])
        .current_dir(repo_root)
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            warn!(error = %e, "failed to run git ls-files");
            return Vec::new();
        }
    };

    if !output.status.success() {
        warn!(
            code = ?output.status.code(),
            "git ls-files failed; continuing without ignored paths"
        );
        return Vec::new();
    }

    let paths = parse_path_lines(&String::from_utf8_lossy(&output.stdout));
    debug!(count = paths.len(), "resolved ignored paths");
    paths
}

fn parse_path_lines(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Forward slashes, no leading or trailing separator
fn normalize(path: &str) -> String {
    path.trim().replace('\\', "/").trim_matches('/').to_string()
}

fn anchored(path: &str) -> String {
    format!("(^|/){}(/|$)", regex::escape(path))
}

/// Render an alternation of path-boundary anchored literals.
///
/// The seed directories come first, then each ignored path in input order.
pub fn to_exclude_regex<I, S>(paths: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let seeds = SEED_EXCLUDES.iter().map(|d| anchored(d));
    let extra = paths
        .into_iter()
        .map(|p| normalize(p.as_ref()))
        .filter(|p| !p.is_empty())
        .map(|p| anchored(&p));

    seeds.chain(extra).collect::<Vec<_>>().join("|")
}

/// Render a deduplicated comma-separated list, first occurrence wins.
pub fn to_exclude_csv<I, S>(paths: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let items = SEED_EXCLUDES
        .iter()
        .chain(std::iter::once(&TESTS_DIR))
        .map(|s| s.to_string())
        .chain(paths.into_iter().map(|p| normalize(p.as_ref())));

    let mut seen = HashSet::new();
    items
        .filter(|item| !item.is_empty() && seen.insert(item.clone()))
        .collect::<Vec<_>>()
        .join(",")
}
