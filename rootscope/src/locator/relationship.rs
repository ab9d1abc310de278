//! Boundary-aware relationships between normalized paths.
//!
//! A plain string prefix test would treat `/a/b` as a prefix of `/a/bc`.
//! Everything here only accepts a prefix that ends at a separator.

use crate::locator::normalize::SEPARATOR;
use crate::locator::types::NormalizedPath;

/// Relationship between two normalized paths.
///
/// # Examples
///
/// ```
/// use rootscope::locator::{NormalizedPath, PathRelationship};
///
/// let root = NormalizedPath::of("/home/user/lib");
/// let class = NormalizedPath::of("/home/user/lib/com/Foo.class");
///
/// assert_eq!(
///     PathRelationship::between(&root, &class),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same.
    Same,

    /// Neither path lies beneath the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two normalized paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootscope::locator::{NormalizedPath, PathRelationship};
    ///
    /// let b = NormalizedPath::of("/a/b");
    /// let bc = NormalizedPath::of("/a/bc");
    /// assert_eq!(PathRelationship::between(&b, &bc), PathRelationship::Unrelated);
    ///
    /// let root = NormalizedPath::of("/");
    /// assert_eq!(PathRelationship::between(&root, &b), PathRelationship::Ancestor);
    /// ```
    #[must_use]
    pub fn between(path1: &NormalizedPath, path2: &NormalizedPath) -> Self {
        let (p1, p2) = (path1.as_str(), path2.as_str());

        if p1 == p2 {
            return Self::Same;
        }
        if is_boundary_prefix(p1, p2) {
            return Self::Ancestor;
        }
        if is_boundary_prefix(p2, p1) {
            return Self::Descendant;
        }

        Self::Unrelated
    }

    /// Check if the relationship is hierarchical (not unrelated).
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if `path` is within `directory` (descendant or same).
    #[must_use]
    pub fn is_within(path: &NormalizedPath, directory: &NormalizedPath) -> bool {
        matches!(Self::between(path, directory), Self::Descendant | Self::Same)
    }

    /// Check if `path` contains `other` (ancestor or same).
    #[must_use]
    pub fn contains(path: &NormalizedPath, other: &NormalizedPath) -> bool {
        matches!(Self::between(path, other), Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    #[must_use]
    pub fn description(&self, path1: &NormalizedPath, path2: &NormalizedPath) -> String {
        match self {
            Self::Ancestor => format!("{path1} is an ancestor of {path2}"),
            Self::Descendant => format!("{path1} is a descendant of {path2}"),
            Self::Same => format!("{path1} and {path2} are the same path"),
            Self::Unrelated => format!("{path1} and {path2} are unrelated paths"),
        }
    }
}

/// Whether `prefix` is a strict prefix of `path` ending at a separator.
///
/// An empty prefix matches nothing.
///
/// # Examples
///
/// ```
/// use rootscope::locator::relationship::is_boundary_prefix;
///
/// assert!(is_boundary_prefix("/a/b", "/a/b/c"));
/// assert!(!is_boundary_prefix("/a/b", "/a/bc"));
/// assert!(!is_boundary_prefix("/a/b", "/a/b"));
/// assert!(is_boundary_prefix("/", "/a"));
/// ```
#[must_use]
pub fn is_boundary_prefix(prefix: &str, path: &str) -> bool {
    if prefix.is_empty() {
        return false;
    }
    match path.strip_prefix(prefix) {
        Some(rest) if !rest.is_empty() => {
            rest.starts_with(SEPARATOR) || prefix.ends_with(SEPARATOR)
        }
        _ => false,
    }
}
