//! Smoke tests for the simcalc binary
//!
//! Only the headless `press` command is exercised end to end; `desktop`
//! needs a terminal and `serve` blocks until Ctrl+C.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin until assert_cmd is updated
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a command for the simcalc binary with colors off
fn simcalc() -> Command {
    let mut cmd = Command::cargo_bin("simcalc").expect("simcalc binary should exist");
    cmd.env_remove("RUST_LOG").args(["--color", "never"]);
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    simcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0.0"));
}

#[test]
fn test_help_flag() {
    simcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("desktop"))
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("press"));
}

#[test]
fn test_no_args_fails() {
    Command::cargo_bin("simcalc").unwrap().assert().failure();
}

#[test]
fn test_serve_help() {
    simcalc()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("SIMCALC_PORT"));
}

// ============================================================================
// Press Command Tests
// ============================================================================

#[test]
fn test_press_addition() {
    simcalc()
        .args(["press", "5", "+", "3", "="])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn test_press_chains_left_to_right() {
    simcalc()
        .args(["press", "3", "+", "4", "×", "2", "="])
        .assert()
        .success()
        .stdout("14\n");
}

#[test]
fn test_press_subtraction_below_zero() {
    simcalc()
        .args(["press", "3", "-", "5", "="])
        .assert()
        .success()
        .stdout("-2\n");
}

#[test]
fn test_press_decimal_and_percent() {
    simcalc()
        .args(["press", "5", "0", "%"])
        .assert()
        .success()
        .stdout("0.5\n");
}

#[test]
fn test_press_without_equals_shows_entry() {
    simcalc()
        .args(["press", "1", "2", "+", "3"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_press_divide_by_zero() {
    simcalc()
        .args(["press", "7", "÷", "0", "="])
        .assert()
        .failure()
        .stdout("Error\n")
        .stderr(predicate::str::contains("Cannot divide by zero"));
}

#[test]
fn test_press_unknown_button() {
    simcalc()
        .args(["press", "2", "sqrt"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("unknown button 'sqrt'"));
}

#[test]
fn test_press_requires_labels() {
    simcalc().arg("press").assert().failure();
}
