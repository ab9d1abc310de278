//! Conversion of filesystem path strings into absolute root locators.
//!
//! Used for path-list segments, which are plain filesystem paths rather than
//! URLs. Unlike [`normalize`](super::normalize::normalize), these functions
//! consult the home directory and the working directory, and they can fail.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::locator::types::Locator;

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use rootscope::locator::absolute::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/lib")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("lib"));
///
/// let expanded = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(expanded, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Resolve `.` and `..` components in an absolute path.
///
/// # Errors
///
/// Returns an error if the path contains too many `..` components that would
/// escape the root directory.
///
/// # Examples
///
/// ```
/// use rootscope::locator::absolute::resolve_path_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_path_components(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/a/c"));
/// ```
pub fn resolve_path_components(path: &Path) -> Result<PathBuf> {
    let mut result = PathBuf::new();
    let mut has_root = false;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(c) => {
                result.push(c);
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if !result.pop() {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "Path contains too many '..' components (escapes root)"
                            .to_string(),
                    });
                }
            }
        }
    }

    if has_root && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }

    Ok(result)
}

/// Make a filesystem path absolute: expand `~`, join relative paths onto the
/// working directory, resolve `.` and `..`.
///
/// # Errors
///
/// Returns an error if tilde expansion fails, the working directory cannot be
/// determined, or the path escapes the root.
///
/// # Examples
///
/// ```no_run
/// use rootscope::locator::absolute::absolutize;
/// use std::path::Path;
///
/// let absolute = absolutize(Path::new("./target/classes")).unwrap();
/// assert!(absolute.is_absolute());
/// ```
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Cannot get current directory: {e}"),
        })?;
        cwd.join(expanded)
    };

    resolve_path_components(&absolute)
}

/// Convert one path-list segment into a root locator.
///
/// The locator is the absolute path as a string.
///
/// # Errors
///
/// Returns an error if the segment is empty or cannot be made absolute.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use rootscope::locator::absolute::segment_to_locator;
///
/// let locator = segment_to_locator("/opt/lib/../classes").unwrap();
/// assert_eq!(locator.as_str(), "/opt/classes");
/// # }
/// ```
pub fn segment_to_locator(segment: &str) -> Result<Locator> {
    if segment.trim().is_empty() {
        return Err(Error::InvalidPath {
            path: PathBuf::from(segment),
            reason: "path-list segment is empty".to_string(),
        });
    }

    let absolute = absolutize(Path::new(segment))?;
    let raw = absolute.to_str().ok_or_else(|| Error::InvalidPath {
        path: absolute.clone(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;
    Ok(Locator::new(raw))
}
