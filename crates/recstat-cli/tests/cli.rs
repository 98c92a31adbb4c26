//! Integration tests for the recstat binary.
//!
//! These run the built executable against scratch daemon directories and
//! check what lands on stdout, stderr and the exit status.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn recstat(args: &[&str], dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_recstat"))
        .args(args)
        .env_remove("RUST_LOG")
        .env("PATH", dir)
        .output()
        .expect("Failed to run recstat")
}

/// A stopped daemon that finished its last pass.
fn stopped_daemon() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.pid"), "").unwrap();
    fs::write(dir.path().join("idxstatus.txt"), "phase = 6\ntotfiles = 500\n").unwrap();
    dir
}

#[test]
fn test_prints_report_for_stopped_daemon() {
    let daemon = stopped_daemon();
    let dir = daemon.path().to_str().unwrap();

    let output = recstat(&["-d", dir, "--no-debug-copies"], daemon.path());
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("daemon is not running\n"));
    assert!(stdout.contains("DbIxStatus is 6: DBIXS_DONE\n"));
    assert!(stdout.contains("Total files in index: 500\n"));

    // No helper on our scratch PATH.
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Could not find 'recoll' executable"));
}

#[test]
fn test_quiet_suppresses_helper_warning() {
    let daemon = stopped_daemon();
    let dir = daemon.path().to_str().unwrap();

    let output = recstat(&["-d", dir, "--quiet"], daemon.path());
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_rejects_missing_directory() {
    let scratch = TempDir::new().unwrap();
    let missing = scratch.path().join("nope");

    let output = recstat(&["-d", missing.to_str().unwrap()], scratch.path());
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("not an existing directory"));
}

#[test]
fn test_failure_exits_non_zero_without_partial_report() {
    let daemon = TempDir::new().unwrap();
    fs::write(daemon.path().join("index.pid"), "abc").unwrap();
    let dir = daemon.path().to_str().unwrap();

    let output = recstat(&["-d", dir, "-q"], daemon.path());
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Not a valid process ID"));
}

#[test]
fn test_degrade_from_config_file() {
    let daemon = TempDir::new().unwrap();
    fs::write(daemon.path().join("index.pid"), "").unwrap();

    let config_path = daemon.path().join("recstat.toml");
    fs::write(
        &config_path,
        format!(
            "recoll_dir = {:?}\nmissing_artifacts = \"degrade\"\ndebug_copies = false\n",
            daemon.path().to_str().unwrap()
        ),
    )
    .unwrap();

    let output = recstat(&["-c", config_path.to_str().unwrap(), "-q"], daemon.path());
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "daemon is not running\n daemon has not run yet (no progress file)\n"
    );
}
