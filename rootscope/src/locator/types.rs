//! Core types for locators and roots.
//!
//! A [`Locator`] is the raw, opaque string a runtime hands out for a search
//! root or a resource. A [`Root`] pairs a locator with its normalized
//! comparison form, and a [`RootSet`] is the ordered, deduplicated collection
//! produced by one enumeration.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::locator::normalize::normalize;
use crate::locator::relationship::PathRelationship;

/// A raw locator: a path, a `file:` URL, an archive URL, or a nested archive
/// path such as `jar:file:/app.jar!/lib/inner.jar!/`.
///
/// # Examples
///
/// ```
/// use rootscope::Locator;
///
/// let locator = Locator::new("jar:file:/opt/app.jar!/com/example/Foo.class");
/// assert_eq!(locator.normalized().as_str(), "/opt/app.jar/com/example/Foo.class");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locator(String);

impl Locator {
    /// Create a locator from its raw string form.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compute the normalized comparison form of this locator.
    #[must_use]
    pub fn normalized(&self) -> NormalizedPath {
        normalize(&self.0)
    }

    /// Convert into the raw string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locator {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Locator {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl AsRef<str> for Locator {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The canonical, syntax-independent form of a locator.
///
/// Normalized paths use `/` as the only separator, never end with a
/// separator (except the bare root `/`), and carry no scheme prefixes or
/// nested-archive markers. They can only be produced by
/// [`normalize`](crate::locator::normalize::normalize).
///
/// # Examples
///
/// ```
/// use rootscope::locator::NormalizedPath;
///
/// let root = NormalizedPath::of("file:/a/b/");
/// let inside = NormalizedPath::of("/a/b/c.txt");
/// let sibling = NormalizedPath::of("/a/bc/c.txt");
///
/// assert!(root.contains(&inside));
/// assert!(!root.contains(&sibling));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NormalizedPath(String);

impl NormalizedPath {
    pub(crate) fn from_normalized(normalized: String) -> Self {
        Self(normalized)
    }

    /// Normalize a raw locator string.
    #[must_use]
    pub fn of(locator: &str) -> Self {
        normalize(locator)
    }

    /// Get the normalized string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the normalized string in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the normalized form is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `other` is this path or lies beneath it, at a separator
    /// boundary.
    #[must_use]
    pub fn contains(&self, other: &NormalizedPath) -> bool {
        PathRelationship::contains(self, other)
    }

    /// Whether this path is `directory` or lies beneath it.
    #[must_use]
    pub fn is_within(&self, directory: &NormalizedPath) -> bool {
        PathRelationship::is_within(self, directory)
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry in the effective search space.
///
/// Equality and hashing use the raw locator only; the normalized form is
/// derived from it when the root is built.
///
/// # Examples
///
/// ```
/// use rootscope::Root;
///
/// let root = Root::new("file:/opt/lib/classes/");
/// assert_eq!(root.locator().as_str(), "file:/opt/lib/classes/");
/// assert_eq!(root.normalized().as_str(), "/opt/lib/classes");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Root {
    locator: Locator,
    normalized: NormalizedPath,
}

impl Root {
    /// Build a root from a locator.
    pub fn new(locator: impl Into<Locator>) -> Self {
        let locator = locator.into();
        let normalized = locator.normalized();
        Self {
            locator,
            normalized,
        }
    }

    /// The raw locator this root was discovered as.
    #[must_use]
    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    /// The normalized comparison form.
    #[must_use]
    pub fn normalized(&self) -> &NormalizedPath {
        &self.normalized
    }

    /// Whether `resource` sits inside this root.
    #[must_use]
    pub fn owns(&self, resource: &NormalizedPath) -> bool {
        self.normalized.contains(resource)
    }

    /// Convert into the raw locator.
    #[must_use]
    pub fn into_locator(self) -> Locator {
        self.locator
    }
}

impl PartialEq for Root {
    fn eq(&self, other: &Self) -> bool {
        self.locator == other.locator
    }
}

impl Eq for Root {}

impl std::hash::Hash for Root {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.locator.hash(state);
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.locator.fmt(f)
    }
}

impl From<Locator> for Root {
    fn from(locator: Locator) -> Self {
        Self::new(locator)
    }
}

impl From<&str> for Root {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Ordered, deduplicated collection of roots.
///
/// Order is discovery order. Two locators with the same normalized form are
/// duplicates; the first one seen is kept. A `RootSet` has no mutating API.
///
/// # Examples
///
/// ```
/// use rootscope::{Locator, RootSet};
///
/// let set: RootSet = ["/x", "file:/x/", "/y"].into_iter().map(Locator::from).collect();
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.as_slice()[0].locator().as_str(), "/x");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RootSet {
    roots: Vec<Root>,
}

impl RootSet {
    /// An empty root set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from locators in discovery order, dropping duplicates.
    pub fn from_locators<I>(locators: I) -> Self
    where
        I: IntoIterator<Item = Locator>,
    {
        let mut seen = HashSet::new();
        let mut roots = Vec::new();
        for locator in locators {
            let root = Root::new(locator);
            if seen.insert(root.normalized().clone()) {
                roots.push(root);
            } else {
                log::trace!("dropping duplicate root {}", root.locator());
            }
        }
        Self { roots }
    }

    /// Number of roots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Whether the set has no roots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Iterate roots in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, Root> {
        self.roots.iter()
    }

    /// The roots as a slice, in discovery order.
    #[must_use]
    pub fn as_slice(&self) -> &[Root] {
        &self.roots
    }

    /// Whether a root with the same normalized form as `locator` is present.
    #[must_use]
    pub fn contains(&self, locator: &Locator) -> bool {
        let normalized = locator.normalized();
        self.roots.iter().any(|root| root.normalized() == &normalized)
    }

    /// The raw locators, in discovery order.
    pub fn locators(&self) -> impl Iterator<Item = &Locator> {
        self.roots.iter().map(Root::locator)
    }

    /// Convert into the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<Root> {
        self.roots
    }
}

impl FromIterator<Locator> for RootSet {
    fn from_iter<I: IntoIterator<Item = Locator>>(iter: I) -> Self {
        Self::from_locators(iter)
    }
}

impl AsRef<[Root]> for RootSet {
    fn as_ref(&self) -> &[Root] {
        &self.roots
    }
}

impl<'a> IntoIterator for &'a RootSet {
    type Item = &'a Root;
    type IntoIter = std::slice::Iter<'a, Root>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}

impl IntoIterator for RootSet {
    type Item = Root;
    type IntoIter = std::vec::IntoIter<Root>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.into_iter()
    }
}
