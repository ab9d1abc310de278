//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builders isolated from the caller's environment
//! - Root tree fixtures on disk

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the CLI reads; cleared for every test command.
const ISOLATED_VARS: &[&str] = &[
    "CLASSPATH",
    "ROOTSCOPE_CONFIG",
    "ROOTSCOPE_PATH_LIST_VAR",
    "ROOTSCOPE_PATH_SEPARATOR",
    "ROOTSCOPE_MATCH_MODE",
    "ROOTSCOPE_LOG_MODE",
];

/// Test environment with an isolated working and home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Stand-in home directory, so no user config is picked up
    pub home_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let home_dir = temp_path.join("home");
        std::fs::create_dir_all(&home_dir).expect("Failed to create home dir");

        Self {
            temp_dir,
            temp_path,
            home_dir,
        }
    }

    /// Get a command builder running inside this environment.
    ///
    /// The command runs in the temp directory with `HOME` redirected and
    /// every rootscope variable removed.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("rootscope").expect("Failed to find rootscope binary");
        cmd.current_dir(&self.temp_path).env("HOME", &self.home_dir);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a directory root under the environment.
    pub fn create_root(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create root directory");
        path
    }

    /// Create a file below a root, creating parent directories.
    pub fn create_file(&self, root: &str, relative: &str) -> PathBuf {
        let path = self.temp_path.join(root).join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, b"").expect("Failed to write file");
        path
    }

    /// Write a file at the top of the environment and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Join the named roots into a path-list with `separator`.
    pub fn path_list(&self, roots: &[&str], separator: char) -> String {
        roots
            .iter()
            .map(|name| self.temp_path.join(name).to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(&separator.to_string())
    }

    /// Absolute path of a named root, as a string.
    pub fn root_str(&self, name: &str) -> String {
        self.temp_path.join(name).to_string_lossy().into_owned()
    }
}

/// Parse command stdout as JSON.
#[allow(dead_code)]
pub fn parse_json(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).expect("Output is not valid JSON")
}
