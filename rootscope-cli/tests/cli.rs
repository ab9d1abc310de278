//! Integration tests for the rootscope CLI.
//!
//! These tests verify that the CLI binary behaves correctly, including
//! argument parsing, help text, and version output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Test that the binary runs without arguments and displays help/error.
#[test]
fn test_cli_no_arguments() {
    let mut cmd = Command::cargo_bin("rootscope").expect("Failed to find rootscope binary");

    // With clap subcommands required, no arguments should fail and show usage
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

/// Test that the --version flag displays version information.
#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::cargo_bin("rootscope").expect("Failed to find rootscope binary");

    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("rootscope"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that the --help flag displays help text.
#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("rootscope").expect("Failed to find rootscope binary");

    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains(
            "Enumerate search roots and map resources back to them",
        ));
}

/// Test that every subcommand is listed in the help text.
#[test]
fn test_cli_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("rootscope").expect("Failed to find rootscope binary");

    let output = cmd.arg("--help").output().expect("Failed to run rootscope");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in [
        "roots",
        "resources",
        "prefix-roots",
        "locate",
        "match",
        "normalize",
        "validate",
        "completions",
    ] {
        assert!(stdout.contains(name), "help is missing {name}");
    }
}

/// Test that an invalid subcommand produces an error.
#[test]
fn test_cli_invalid_subcommand() {
    let mut cmd = Command::cargo_bin("rootscope").expect("Failed to find rootscope binary");

    cmd.arg("invalid-command");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

/// Test that an unknown output format is rejected by the parser.
#[test]
fn test_cli_invalid_format() {
    let mut cmd = Command::cargo_bin("rootscope").expect("Failed to find rootscope binary");

    cmd.args(["--format", "xml", "roots"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}
