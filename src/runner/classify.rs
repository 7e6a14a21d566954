//! Status classification for executed checks

use super::plan::TEST_RUNNER_PREFIX;
use crate::report::CheckStatus;

/// Output fragments that mark a zero-exit test run as unclean.
///
/// pytest can exit 0 while printing teardown noise on some platforms.
pub const TEST_RUNNER_WARNING_SIGNATURES: &[&str] = &[
    "Exception ignored in atexit callback",
    "PermissionError: [WinError 5]",
    "Traceback (most recent call last):",
];

/// Map a check's exit code and output to a status.
///
/// Any non-zero exit fails. A zero exit only warns for the test runner, and
/// only when its output carries one of [`TEST_RUNNER_WARNING_SIGNATURES`].
pub fn classify(name: &str, exit_code: i32, output: &str) -> CheckStatus {
    if exit_code != 0 {
        return CheckStatus::Fail;
    }

    if name.starts_with(TEST_RUNNER_PREFIX)
        && TEST_RUNNER_WARNING_SIGNATURES
            .iter()
            .any(|sig| output.contains(sig))
    {
        return CheckStatus::Warn;
    }

    CheckStatus::Pass
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonzero_exit_fails() {
        assert_eq!(classify("ruff (lint)", 1, ""), CheckStatus::Fail);
        assert_eq!(classify("pytest (tests)", 2, "all good"), CheckStatus::Fail);
        assert_eq!(classify("mypy (types)", -1, ""), CheckStatus::Fail);
    }

    #[test]
    fn test_clean_test_run_passes() {
        assert_eq!(classify("pytest (tests)", 0, ""), CheckStatus::Pass);
        assert_eq!(
            classify("pytest (tests)", 0, "12 passed in 0.31s"),
            CheckStatus::Pass
        );
    }

    #[test]
    fn test_teardown_noise_warns() {
        assert_eq!(
            classify("pytest (tests)", 0, "Exception ignored in atexit callback"),
            CheckStatus::Warn
        );

        let noisy = "3 passed\nTraceback (most recent call last):\n  File \"x.py\"";
        assert_eq!(classify("pytest (tests)", 0, noisy), CheckStatus::Warn);

        let windows = "PermissionError: [WinError 5] Access is denied";
        assert_eq!(classify("pytest (tests)", 0, windows), CheckStatus::Warn);
    }

    #[test]
    fn test_signatures_ignored_for_other_tools() {
        let noisy = "Traceback (most recent call last):";
        assert_eq!(classify("ruff (lint)", 0, noisy), CheckStatus::Pass);
        assert_eq!(classify("bandit (security)", 0, noisy), CheckStatus::Pass);
    }
}
