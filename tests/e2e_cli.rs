//! CLI end-to-end tests
//!
//! Tests for the roster command-line interface. Each invocation is a
//! separate process sharing a database file inside a temp dir, so these
//! also cover that state persists across runs.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the roster binary
#[allow(deprecated)]
fn roster_cmd() -> Command {
    Command::cargo_bin("roster").unwrap()
}

/// Write a config pointing at a database file inside the temp dir.
fn write_config(dir: &tempfile::TempDir) -> PathBuf {
    let db_path = dir.path().join("roster.db");
    let config_file = dir.path().join("roster.toml");

    fs::write(
        &config_file,
        format!("[database]\npath = {:?}\n", db_path.to_string_lossy()),
    )
    .unwrap();

    config_file
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = roster_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = roster_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("roster"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_command() {
    let mut cmd = roster_cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("roster"));
}

#[test]
fn test_cli_demo_help() {
    let mut cmd = roster_cmd();
    cmd.args(["demo", "--help"]).assert().success().stdout(
        predicate::str::contains("CRUD demonstration"),
    );
}

#[test]
fn test_cli_demo_sequence() {
    let temp = tempdir().unwrap();
    let config_file = write_config(&temp);

    let mut cmd = roster_cmd();
    cmd.args(["--config", config_file.to_str().unwrap(), "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created users with ids 1 and 2"))
        .stdout(predicate::str::contains(
            "User{id=1, name='Ada Lovelace', email='ada@example.com'}",
        ))
        .stdout(predicate::str::contains(
            "User{id=1, name='Ada Lovelace King', email='ada.king@example.com'}",
        ))
        .stdout(predicate::str::contains(
            "User{id=2, name='Grace Hopper', email='grace@example.com'}",
        ))
        .stdout(predicate::str::contains("Demo finished"));
}

#[test]
fn test_cli_add_list_update_remove_round_trip() {
    let temp = tempdir().unwrap();
    let config_file = write_config(&temp);
    let config = config_file.to_str().unwrap();

    roster_cmd()
        .args(["--config", config, "add", "Annie Easley", "annie@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "User{id=1, name='Annie Easley', email='annie@example.com'}",
        ));

    roster_cmd()
        .args(["--config", config, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Annie Easley"));

    roster_cmd()
        .args(["--config", config, "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("annie@example.com"));

    roster_cmd()
        .args([
            "--config",
            config,
            "update",
            "1",
            "Annie J. Easley",
            "aje@example.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated user 1"));

    roster_cmd()
        .args(["--config", config, "remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed user 1"));

    roster_cmd()
        .args(["--config", config, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No users."));
}

#[test]
fn test_cli_missing_id_is_silent_noop() {
    let temp = tempdir().unwrap();
    let config_file = write_config(&temp);
    let config = config_file.to_str().unwrap();

    // Neither update nor remove of a missing id is a failure
    roster_cmd()
        .args(["--config", config, "update", "42", "Nobody", "nobody@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No user with id 42"));

    roster_cmd()
        .args(["--config", config, "remove", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No user with id 42"));
}

#[test]
fn test_cli_unreadable_config_exits_nonzero() {
    let mut cmd = roster_cmd();
    cmd.args(["--config", "/nonexistent/roster.toml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config"));
}

#[test]
fn test_cli_validate_default_config() {
    let mut cmd = roster_cmd();
    cmd.arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("roster.db"));
}

#[test]
fn test_cli_validate_config_file() {
    let temp = tempdir().unwrap();
    let config_file = write_config(&temp);

    let mut cmd = roster_cmd();
    cmd.args(["validate", config_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}
