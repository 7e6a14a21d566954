//! Command execution for planned checks
//!
//! Runs one external tool to completion and captures what it printed. A
//! non-zero exit is ordinary data here; it is classified, never raised.

use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

use super::classify::classify;
use crate::report::{CheckResult, CheckStatus};

/// Exit code recorded for a tool that is missing or cannot be started
pub const NOT_FOUND_EXIT_CODE: i32 = 127;

/// Execute a check and classify its outcome
///
/// # Arguments
/// * `name` - Display name of the check
/// * `command` - Program followed by its arguments; must not be empty
/// * `working_dir` - Directory the tool runs in (the repository root)
///
/// # Returns
/// The captured result. If the program cannot be spawned at all the result
/// fails with exit code 127 and the spawn error as output.
pub fn run_command(name: &str, command: &[String], working_dir: &Path) -> CheckResult {
    let Some((program, args)) = command.split_first() else {
        return CheckResult::new(
            name,
            Vec::new(),
            NOT_FOUND_EXIT_CODE,
            "No command to run.",
            CheckStatus::Fail,
        );
    };

    debug!(check = name, command = %command.join(" "), "running check");

    let output = Command::new(program)
        .args(args)
        .current_dir(working_dir)
        .stdin(Stdio::null())
        .output();

    let output = match output {
        Ok(output) => output,
        Err(e) => {
            warn!(check = name, error = %e, "failed to start check");
            return CheckResult::new(
                name,
                command.to_vec(),
                NOT_FOUND_EXIT_CODE,
                format!("Failed to start '{}': {}", program, e),
                CheckStatus::Fail,
            );
        }
    };

    let exit_code = output.status.code().unwrap_or(-1);
    let text = combine_output(&output.stdout, &output.stderr);
    let status = classify(name, exit_code, &text);

    debug!(check = name, exit_code, %status, "check finished");

    CheckResult::new(name, command.to_vec(), exit_code, text, status)
}

/// stdout then stderr, trimmed as a whole
fn combine_output(stdout: &[u8], stderr: &[u8]) -> String {
    let mut text = String::from_utf8_lossy(stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(stderr));
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_combine_output_order_and_trim() {
        assert_eq!(combine_output(b"\n out\n", b"err \n"), "out\nerr");
        assert_eq!(combine_output(b"", b""), "");
    }

    #[cfg(unix)]
    #[test]
    fn test_run_command_success() {
        let dir = TempDir::new().unwrap();
        let result = run_command("echo (test)", &argv(&["echo", "hello"]), dir.path());

        assert_eq!(result.exit_code, 0);
        assert_eq!(result.output, "hello");
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.command, argv(&["echo", "hello"]));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_command_failure_is_captured() {
        let dir = TempDir::new().unwrap();
        let script = "echo out; echo err 1>&2; exit 3";
        let result = run_command("sh (script)", &argv(&["sh", "-c", script]), dir.path());

        assert_eq!(result.exit_code, 3);
        assert_eq!(result.output, "out\nerr");
        assert_eq!(result.status, CheckStatus::Fail);
    }

    #[cfg(unix)]
    #[test]
    fn test_run_command_uses_working_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "x").unwrap();
        let result = run_command("ls (dir)", &argv(&["ls"]), dir.path());

        assert!(result.output.contains("marker.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_command_test_runner_noise_warns() {
        let dir = TempDir::new().unwrap();
        let script = "echo '1 passed'; echo 'Exception ignored in atexit callback' 1>&2";
        let result = run_command("pytest (tests)", &argv(&["sh", "-c", script]), dir.path());

        assert_eq!(result.exit_code, 0);
        assert_eq!(result.status, CheckStatus::Warn);
    }

    #[test]
    fn test_run_command_unknown_program() {
        let dir = TempDir::new().unwrap();
        let result = run_command(
            "ghost (check)",
            &argv(&["codedoctor_nonexistent_command_xyz"]),
            dir.path(),
        );

        assert_eq!(result.exit_code, NOT_FOUND_EXIT_CODE);
        assert_eq!(result.status, CheckStatus::Fail);
        assert!(result.output.starts_with("Failed to start"));
    }
}
