//! End-to-end tests for the widgetry binary

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a command for the widgetry binary
fn widgetry() -> Command {
    let mut cmd = Command::cargo_bin("widgetry").expect("widgetry binary should exist");
    cmd.env_remove("WIDGETRY_DATA_FILE").env_remove("RUST_LOG");
    cmd
}

/// A command bound to a fresh data file
fn with_data(dir: &TempDir) -> (Command, PathBuf) {
    let path = dir.path().join("storage.json");
    let mut cmd = widgetry();
    cmd.arg("--data-file").arg(&path).arg("--color").arg("never");
    (cmd, path)
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    widgetry()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    widgetry()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("calc"))
        .stdout(predicate::str::contains("notes"))
        .stdout(predicate::str::contains("sticky"));
}

#[test]
fn test_no_args_fails() {
    widgetry().assert().failure();
}

// ============================================================================
// Calc
// ============================================================================

#[test]
fn test_calc_expression() {
    widgetry()
        .args(["calc", "2+3*4"])
        .assert()
        .success()
        .stdout("14\n");
}

#[test]
fn test_calc_error_exits_non_zero() {
    widgetry()
        .args(["calc", "1/0"])
        .assert()
        .failure()
        .stdout("Error\n")
        .stderr(predicate::str::contains("Division by zero"));
}

#[test]
fn test_calc_deeply_nested_is_error() {
    let expr = format!("{}1", "(".repeat(50_000));
    widgetry()
        .arg("calc")
        .arg(&expr)
        .assert()
        .failure()
        .stdout("Error\n");
}

// ============================================================================
// Notes
// ============================================================================

#[test]
fn test_notes_fresh_board_lists_samples() {
    let dir = TempDir::new().unwrap();
    let (mut cmd, path) = with_data(&dir);
    cmd.args(["notes", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy groceries for the week"));
    assert!(!path.exists());
}

#[test]
fn test_notes_add_show_edit_delete() {
    let dir = TempDir::new().unwrap();

    let (mut cmd, path) = with_data(&dir);
    cmd.args(["notes", "--no-samples", "add", "Groceries"])
        .assert()
        .success();
    assert!(path.exists());

    let (mut cmd, _) = with_data(&dir);
    cmd.args(["notes", "edit", "1", "--content", "milk"])
        .assert()
        .success();

    let (mut cmd, _) = with_data(&dir);
    cmd.args(["notes", "show", "1"])
        .assert()
        .success()
        .stdout("Groceries\n\nmilk\n");

    let (mut cmd, _) = with_data(&dir);
    cmd.args(["notes", "list"])
        .assert()
        .success()
        .stdout("  1. Groceries\n");

    let (mut cmd, _) = with_data(&dir);
    cmd.args(["notes", "delete", "1"]).assert().success();

    let (mut cmd, _) = with_data(&dir);
    cmd.args(["notes", "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn test_notes_edit_from_stdin() {
    let dir = TempDir::new().unwrap();
    let (mut cmd, _) = with_data(&dir);
    cmd.args(["notes", "--no-samples", "add", "Plans"])
        .assert()
        .success();

    let (mut cmd, _) = with_data(&dir);
    cmd.args(["notes", "edit", "1", "--stdin"])
        .write_stdin("go hiking\n")
        .assert()
        .success();

    let (mut cmd, _) = with_data(&dir);
    cmd.args(["notes", "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"content\": \"go hiking\""));
}

#[test]
fn test_notes_blank_heading() {
    let dir = TempDir::new().unwrap();
    let (mut cmd, path) = with_data(&dir);
    cmd.args(["notes", "add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a note heading!"));
    assert!(!path.exists());
}

#[test]
fn test_notes_out_of_range() {
    let dir = TempDir::new().unwrap();
    let (mut cmd, _) = with_data(&dir);
    cmd.args(["notes", "--no-samples", "show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn test_data_file_from_env() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("env.json");
    widgetry()
        .env("WIDGETRY_DATA_FILE", &path)
        .args(["sticky", "add", "From env"])
        .assert()
        .success();
    assert!(path.exists());
}

// ============================================================================
// Sticky
// ============================================================================

#[test]
fn test_sticky_round_trip() {
    let dir = TempDir::new().unwrap();

    let (mut cmd, _) = with_data(&dir);
    cmd.args(["sticky", "add", "Ideas"]).assert().success();

    let (mut cmd, _) = with_data(&dir);
    cmd.args(["sticky", "edit", "1", "--content", "kite"])
        .assert()
        .success();

    let (mut cmd, _) = with_data(&dir);
    cmd.args(["sticky", "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Ideas\""))
        .stdout(predicate::str::contains("\"content\": \"kite\""));
}

#[test]
fn test_sticky_blank_title() {
    let dir = TempDir::new().unwrap();
    let (mut cmd, _) = with_data(&dir);
    cmd.args(["sticky", "add", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a note!"));
}

#[test]
fn test_boards_share_one_file() {
    let dir = TempDir::new().unwrap();

    let (mut cmd, _) = with_data(&dir);
    cmd.args(["notes", "--no-samples", "add", "Heading"])
        .assert()
        .success();
    let (mut cmd, path) = with_data(&dir);
    cmd.args(["sticky", "add", "Title"]).assert().success();

    let raw = std::fs::read_to_string(path).unwrap();
    assert!(raw.contains("\"notes\""));
    assert!(raw.contains("\"notes_app_data\""));
}
