//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for on-disk root trees and a guard
//! for environment variables.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory holding several directory roots.
///
/// # Examples
///
/// ```no_run
/// # use common::RootTree;
/// let tree = RootTree::new()
///     .with_root("classes")
///     .with_file("classes", "com/example/Foo.class");
/// ```
#[allow(dead_code)]
pub struct RootTree {
    dir: TempDir,
    roots: Vec<String>,
}

#[allow(dead_code)]
impl RootTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            roots: Vec::new(),
        }
    }

    /// Adds a directory root named `name`.
    pub fn with_root(mut self, name: &str) -> Self {
        fs::create_dir_all(self.dir.path().join(name)).unwrap();
        self.roots.push(name.to_string());
        self
    }

    /// Adds an empty archive file standing in for a packaged root.
    pub fn with_archive(mut self, name: &str) -> Self {
        fs::write(self.dir.path().join(name), b"PK\x03\x04").unwrap();
        self.roots.push(name.to_string());
        self
    }

    /// Creates an empty file at `relative` under the root `root`.
    pub fn with_file(self, root: &str, relative: &str) -> Self {
        let path = self.dir.path().join(root).join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
        self
    }

    /// The tree's base directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of the root `name`.
    pub fn root_path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Absolute paths of all roots, in the order they were added.
    pub fn root_paths(&self) -> Vec<String> {
        self.roots
            .iter()
            .map(|name| self.root_path(name).to_string_lossy().into_owned())
            .collect()
    }

    /// All roots joined into a path-list with `separator`.
    pub fn path_list(&self, separator: char) -> String {
        self.root_paths().join(&separator.to_string())
    }
}

/// RAII guard for setting and restoring environment variables.
///
/// Tests using it must be marked `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Sets `key` to `value` until the guard is dropped.
    pub fn set(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Removes `key` until the guard is dropped.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clears every `ROOTSCOPE_*` variable for the duration of a test.
#[allow(dead_code)]
pub fn clear_rootscope_env_vars() -> Vec<EnvGuard> {
    [
        "ROOTSCOPE_PATH_LIST_VAR",
        "ROOTSCOPE_PATH_SEPARATOR",
        "ROOTSCOPE_MATCH_MODE",
        "ROOTSCOPE_LOG_MODE",
    ]
    .iter()
    .map(|k| EnvGuard::remove(k))
    .collect()
}
