//! Resource lookup across the visible roots.
//!
//! The runtime primitive that answers "which resources exist at this relative
//! path" is an external collaborator. [`ResourceLookup`] is its seam;
//! [`StaticLookup`] is an in-memory implementation and [`DirectoryLookup`]
//! answers from directory roots on the local filesystem.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::locator::{Locator, RootSet};

/// Finds resources by relative path.
#[cfg_attr(test, mockall::automock)]
pub trait ResourceLookup {
    /// Every resource visible at `relative`, in lookup order.
    ///
    /// An empty list means nothing is visible there.
    ///
    /// # Errors
    ///
    /// Returns an error when the lookup itself cannot be performed.
    fn find_resources(&self, relative: &str) -> io::Result<Vec<Locator>>;

    /// The first resource visible at `relative`.
    ///
    /// A failed lookup is reported as absent.
    fn find_resource(&self, relative: &str) -> Option<Locator> {
        match self.find_resources(relative) {
            Ok(found) => found.into_iter().next(),
            Err(e) => {
                log::debug!("lookup of '{relative}' failed, treating as absent: {e}");
                None
            }
        }
    }
}

/// A lookup answered from a fixed table.
///
/// # Examples
///
/// ```
/// use rootscope::lookup::{ResourceLookup, StaticLookup};
///
/// let lookup = StaticLookup::new()
///     .with_resource("com/example", "/opt/classes/com/example")
///     .with_resource("com/example", "jar:file:/opt/lib/a.jar!/com/example");
///
/// assert_eq!(lookup.find_resources("com/example").unwrap().len(), 2);
/// assert!(lookup.find_resources("org/other").unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticLookup {
    resources: HashMap<String, Vec<Locator>>,
}

impl StaticLookup {
    /// An empty lookup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource at `relative`, after any already registered there.
    #[must_use]
    pub fn with_resource(
        mut self,
        relative: impl Into<String>,
        locator: impl Into<Locator>,
    ) -> Self {
        self.resources
            .entry(relative.into())
            .or_default()
            .push(locator.into());
        self
    }
}

impl ResourceLookup for StaticLookup {
    fn find_resources(&self, relative: &str) -> io::Result<Vec<Locator>> {
        Ok(self.resources.get(relative).cloned().unwrap_or_default())
    }
}

/// A lookup over the directory roots of a root set.
///
/// Roots are searched in set order. A root whose normalized form is not an
/// existing directory (an archive, a virtual entry, a missing path) is
/// skipped; listing archive contents is outside this lookup.
///
/// # Examples
///
/// ```no_run
/// use rootscope::lookup::{DirectoryLookup, ResourceLookup};
/// use rootscope::{Locator, RootSet};
///
/// let roots: RootSet = ["/opt/app/classes"].into_iter().map(Locator::from).collect();
/// let lookup = DirectoryLookup::new(roots);
/// let found = lookup.find_resources("com/example/Foo.class").unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct DirectoryLookup {
    roots: RootSet,
}

impl DirectoryLookup {
    /// Search the directory roots of `roots`.
    #[must_use]
    pub fn new(roots: RootSet) -> Self {
        Self { roots }
    }

    /// The roots being searched.
    #[must_use]
    pub fn roots(&self) -> &RootSet {
        &self.roots
    }
}

impl ResourceLookup for DirectoryLookup {
    fn find_resources(&self, relative: &str) -> io::Result<Vec<Locator>> {
        let relative = relative.trim_matches('/');
        let mut found = Vec::new();

        for root in &self.roots {
            let directory = PathBuf::from(root.normalized().as_str());
            match metadata_if_present(&directory)? {
                Some(metadata) if metadata.is_dir() => {}
                Some(_) => {
                    log::trace!("skipping non-directory root {root}");
                    continue;
                }
                None => {
                    log::trace!("skipping missing root {root}");
                    continue;
                }
            }

            let candidate = if relative.is_empty() {
                directory
            } else {
                directory.join(relative)
            };
            if metadata_if_present(&candidate)?.is_some() {
                found.push(Locator::new(candidate.to_string_lossy().into_owned()));
            }
        }

        Ok(found)
    }
}

/// Metadata for `path`, or `None` when nothing exists there.
///
/// A path running through a plain file (`root/com/example` where `root/com`
/// is a file) does not exist either. Any other failure is an error.
fn metadata_if_present(path: &Path) -> io::Result<Option<fs::Metadata>> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(Some(metadata)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => {
            if path.ancestors().skip(1).any(Path::is_file) {
                Ok(None)
            } else {
                Err(e)
            }
        }
    }
}
