//! Integration tests for error handling and exit codes.
//!
//! These tests verify that rootscope returns appropriate exit codes:
//! - Exit code 0: Success
//! - Exit code 1: Semantic failure (nothing located, invalid config file)
//! - Exit code 2: Usage error reported by the argument parser
//! - Exit code 4: Invalid arguments
//! - Exit code 6: Resolution and other library errors
//! - Exit code 7: Configuration error

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// Success Cases (Exit Code 0)
// ============================================================================

#[test]
fn test_success_exit_code() {
    let env = TestEnv::new();

    env.command().arg("roots").assert().code(0);
    env.command()
        .args(["normalize", "/a/b/"])
        .assert()
        .code(0);
}

// ============================================================================
// Semantic Failures (Exit Code 1)
// ============================================================================

#[test]
fn test_locate_nothing_exit_code() {
    let env = TestEnv::new();

    env.command()
        .args(["locate", "com.example.Absent"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "));
}

// ============================================================================
// Usage errors (Exit Code 2)
// ============================================================================

#[test]
fn test_unknown_flag_exit_code() {
    let env = TestEnv::new();

    env.command()
        .args(["roots", "--no-such-flag"])
        .assert()
        .code(2);
}

#[test]
fn test_multi_char_separator_exit_code() {
    let env = TestEnv::new();

    env.command()
        .args(["--separator", "::", "roots"])
        .assert()
        .code(2);
}

// ============================================================================
// Invalid arguments (Exit Code 4)
// ============================================================================

#[test]
fn test_missing_config_file_exit_code() {
    let env = TestEnv::new();
    let missing = env.path().join("missing.yaml");

    env.command()
        .arg("--config")
        .arg(&missing)
        .arg("roots")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration file not found"));
}

// ============================================================================
// Library errors (Exit Code 6)
// ============================================================================

#[test]
fn test_empty_segment_exit_code() {
    let env = TestEnv::new();

    env.command()
        .args(["--separator", ":", "--path-list", "/x::/y", "roots"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("cannot resolve"));
}

#[test]
fn test_empty_segment_reported_by_every_query() {
    let env = TestEnv::new();

    for args in [
        vec!["resources", "com.example"],
        vec!["prefix-roots", "com.example"],
        vec!["locate", "com.example.App"],
        vec!["match", "/x/a.class"],
    ] {
        env.command()
            .args(["--separator", ",", "--path-list", "/x,,/y"])
            .args(&args)
            .assert()
            .code(6);
    }
}

// ============================================================================
// Configuration errors (Exit Code 7)
// ============================================================================

#[test]
fn test_malformed_project_config_exit_code() {
    let env = TestEnv::new();
    env.write_file("rootscope.yaml", "layers: [unclosed\n");

    env.command()
        .arg("roots")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_invalid_separator_config_exit_code() {
    let env = TestEnv::new();
    env.write_file("rootscope.yaml", "path_separator: '/'\n");

    env.command()
        .arg("roots")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("path_separator"));
}

#[test]
fn test_invalid_match_mode_env_exit_code() {
    let env = TestEnv::new();

    env.command()
        .env("ROOTSCOPE_MATCH_MODE", "sometimes")
        .arg("roots")
        .assert()
        .code(7);
}

// ============================================================================
// Output hygiene
// ============================================================================

#[test]
fn test_errors_go_to_stderr() {
    let env = TestEnv::new();

    env.command()
        .args(["--separator", ",", "--path-list", "/x,,/y", "roots"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::is_empty().not());
}
