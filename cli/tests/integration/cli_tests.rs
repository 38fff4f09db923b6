//! Integration tests for the CLI skeleton: help, version, and argument
//! validation.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn cleaner() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("beanstalk-cleaner"));
    cmd.env("NO_COLOR", "1");
    cmd
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    cleaner().assert().code(2).stderr(predicate::str::contains(
        "Terminate swapped-out Elastic Beanstalk environments",
    ));
}

#[test]
fn test_cli_help_lists_commands() {
    cleaner()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("clean"))
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("version"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    cleaner()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("beanstalk-cleaner"));
}

#[test]
fn test_version_command_shows_version() {
    cleaner()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("beanstalk-cleaner 0.1.0"));
}

#[test]
fn test_version_command_json_outputs_valid_json() {
    let output = cleaner()
        .args(["version", "--json"])
        .output()
        .expect("run binary");
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(value["version"], "0.1.0");
}

// --- clean arguments ---

#[test]
fn test_clean_help_shows_flags() {
    cleaner()
        .args(["clean", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--test"))
        .stdout(predicate::str::contains("dry-run"))
        .stdout(predicate::str::contains("--aws-profile"))
        .stdout(predicate::str::contains("--kill-oldest-instance"))
        .stdout(predicate::str::contains("--no-kill-oldest-instance"));
}

#[test]
fn test_plan_help_shows_profile() {
    cleaner()
        .args(["plan", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--aws-profile"))
        .stdout(predicate::str::contains("--region"));
}

#[test]
fn test_clean_rejects_unknown_flag() {
    cleaner()
        .args(["clean", "--force"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));
}

// --- Global flags ---

#[test]
fn test_invalid_log_level_is_rejected() {
    cleaner()
        .args(["--log-level", "verbose", "version"])
        .env_remove("BEANSTALK_CLEANER_LOG")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("verbose"));
}

#[test]
fn test_invalid_log_format_is_rejected() {
    cleaner()
        .args(["--log-format", "xml", "version"])
        .assert()
        .code(2);
}

#[test]
fn test_log_level_accepted_after_subcommand() {
    cleaner()
        .args(["version", "--log-level", "debug"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}
