//! Integration tests for the CodeDoctor CLI
//!
//! The binary runs with an empty `PATH`, so every external tool is missing
//! and the scan never depends on what happens to be installed.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(deprecated)]
fn get_cmd() -> Command {
    Command::cargo_bin("codedoctor").unwrap()
}

/// Command with no tools on PATH and an isolated config file
fn isolated_cmd(config_dir: &Path) -> Command {
    let mut cmd = get_cmd();
    cmd.env("PATH", "")
        .env_remove("CODEDOCTOR_CONFIG")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(config_dir.join("config.toml"));
    cmd
}

fn report_dir(repo: &Path) -> PathBuf {
    repo.join(".codedoctor")
}

#[tokio::test]
async fn test_scan_without_tools_fails_with_remediation() {
    let repo = TempDir::new().unwrap();
    let config = TempDir::new().unwrap();

    isolated_cmd(config.path())
        .args(["scan", "--skip-tests"])
        .arg(repo.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Overall: FAIL"))
        .stdout(predicate::str::contains("Checks:  0 passed / 0 warned / 4 failed / 4 total"))
        .stdout(predicate::str::contains("== black (missing) : FAIL =="))
        .stdout(predicate::str::contains("Install it with: python -m pip install black"))
        .stdout(predicate::str::contains("pytest").not())
        .stderr(predicate::str::contains("Wrote:"));

    assert!(report_dir(repo.path()).join("report-latest.txt").exists());
}

#[tokio::test]
async fn test_scan_writes_timestamped_snapshot() {
    let repo = TempDir::new().unwrap();
    let config = TempDir::new().unwrap();

    isolated_cmd(config.path())
        .args(["scan", "--skip-tests"])
        .arg(repo.path())
        .assert()
        .code(2);

    let snapshots: Vec<String> = fs::read_dir(report_dir(repo.path()))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .filter(|name| name != "report-latest.txt" && name != "report-prev.txt")
        .collect();

    assert_eq!(snapshots.len(), 1);
    let name = &snapshots[0];
    // report-YYYYMMDD-HHMMSS.txt
    assert!(name.starts_with("report-") && name.ends_with(".txt"));
    assert_eq!(name.len(), "report-20240101-000000.txt".len());

    let latest = fs::read_to_string(report_dir(repo.path()).join("report-latest.txt")).unwrap();
    let snapshot = fs::read_to_string(report_dir(repo.path()).join(name)).unwrap();
    assert_eq!(latest, snapshot);
}

#[tokio::test]
async fn test_two_scans_rotate_latest_into_previous() {
    let repo = TempDir::new().unwrap();
    let config = TempDir::new().unwrap();
    let latest = report_dir(repo.path()).join("report-latest.txt");
    let previous = report_dir(repo.path()).join("report-prev.txt");

    isolated_cmd(config.path())
        .args(["scan", "--skip-tests"])
        .arg(repo.path())
        .assert()
        .code(2);
    let first = fs::read_to_string(&latest).unwrap();
    assert!(!previous.exists());

    isolated_cmd(config.path())
        .arg("scan")
        .arg(repo.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Previous:"));
    let second = fs::read_to_string(&latest).unwrap();

    assert_eq!(fs::read_to_string(&previous).unwrap(), first);
    assert_ne!(first, second);
    assert!(second.contains("pytest (missing)"));
}

#[tokio::test]
async fn test_scan_json_output() {
    let repo = TempDir::new().unwrap();
    let config = TempDir::new().unwrap();

    let output = isolated_cmd(config.path())
        .args(["scan", "--format", "json"])
        .arg(repo.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["overall_status"], "FAIL");
    assert_eq!(value["exit_code"], 2);
    assert_eq!(value["summary"]["total"], 5);
    assert_eq!(value["results"][4]["name"], "pytest (missing)");
    assert_eq!(value["results"][4]["exit_code"], 127);
}

#[tokio::test]
async fn test_scan_uses_report_dir_from_config() {
    let repo = TempDir::new().unwrap();
    let config = TempDir::new().unwrap();
    fs::write(
        config.path().join("config.toml"),
        "skip_tests = true\nreport_dir = \"health\"\n",
    )
    .unwrap();

    isolated_cmd(config.path())
        .arg("scan")
        .arg(repo.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("pytest").not());

    assert!(repo.path().join("health").join("report-latest.txt").exists());
    assert!(!report_dir(repo.path()).exists());
}

#[tokio::test]
async fn test_cli_flags_override_config() {
    let repo = TempDir::new().unwrap();
    let config = TempDir::new().unwrap();
    fs::write(config.path().join("config.toml"), "skip_tests = true\n").unwrap();

    isolated_cmd(config.path())
        .args(["scan", "--run-tests", "--report-dir", "out"])
        .arg(repo.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("pytest (missing)"));

    assert!(repo.path().join("out").join("report-latest.txt").exists());
}

#[tokio::test]
async fn test_scan_missing_repo_is_runtime_error() {
    let config = TempDir::new().unwrap();

    isolated_cmd(config.path())
        .args(["scan", "/definitely/not/a/repo/path"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Cannot resolve repository path"));
}

#[tokio::test]
async fn test_scan_malformed_config_is_runtime_error() {
    let repo = TempDir::new().unwrap();
    let config = TempDir::new().unwrap();
    fs::write(config.path().join("config.toml"), "skip_tests = [\n").unwrap();

    isolated_cmd(config.path())
        .arg("scan")
        .arg(repo.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[tokio::test]
async fn test_init_creates_config() {
    let config = TempDir::new().unwrap();
    let config_path = config.path().join("config.toml");

    isolated_cmd(config.path())
        .args(["init", "--skip-tests", "--report-dir", ".health"])
        .assert()
        .success();

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("skip_tests = true"));
    assert!(content.contains("report_dir = \".health\""));
    assert!(content.contains("respect_gitignore = true"));
}

#[tokio::test]
async fn test_init_refuses_overwrite_without_force() {
    let config = TempDir::new().unwrap();

    isolated_cmd(config.path()).arg("init").assert().success();

    isolated_cmd(config.path())
        .args(["init", "--fix"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));

    isolated_cmd(config.path())
        .args(["init", "--fix", "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(config.path().join("config.toml")).unwrap();
    assert!(content.contains("apply_fixes = true"));
}

#[tokio::test]
async fn test_generate_man_page() {
    let out = TempDir::new().unwrap();

    get_cmd()
        .args(["generate-man", "--output"])
        .arg(out.path())
        .assert()
        .success();

    let man = fs::read_to_string(out.path().join("codedoctor.1")).unwrap();
    assert!(man.contains("codedoctor"));
}
