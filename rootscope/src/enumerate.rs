//! Discovery of the roots currently in effect, and the queries built on it.
//!
//! [`RootEnumerator`] is handed every collaborator it needs: the innermost
//! layer of the loader chain, the resource lookup, and the fallback
//! path-list. Nothing is cached; every query reads its inputs afresh.

use std::env;

use crate::error::{Error, Result};
use crate::layer::{Layer, LayerChain};
use crate::locator::absolute::segment_to_locator;
use crate::locator::{Locator, MatchMode, Matcher, Root, RootSet};
use crate::lookup::{DirectoryLookup, ResourceLookup};

/// Platform separator between path-list entries.
pub const DEFAULT_PATH_LIST_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// File suffix of a compiled type resource.
pub const TYPE_RESOURCE_SUFFIX: &str = ".class";

/// Enumerates roots and resolves resources against them.
///
/// # Discovery order
///
/// Layers are walked from the innermost layer (the one passed to
/// [`with_layers`](Self::with_layers)) outward through each parent. Within a
/// layer, roots keep the layer's own order. Layers that cannot enumerate
/// are skipped. Only when the whole chain yields no roots is the path-list
/// consulted.
///
/// # Examples
///
/// ```
/// use rootscope::layer::StaticLayer;
/// use rootscope::lookup::StaticLookup;
/// use rootscope::RootEnumerator;
///
/// let chain = StaticLayer::new("app")
///     .with_roots(["/opt/app/classes", "/opt/app/lib/dep.jar"])
///     .with_parent(StaticLayer::new("boot").opaque());
/// let lookup = StaticLookup::new()
///     .with_resource("com/example/Foo.class", "/opt/app/classes/com/example/Foo.class");
///
/// let enumerator = RootEnumerator::new().with_layers(&chain).with_lookup(&lookup);
///
/// assert_eq!(enumerator.current_roots().unwrap().len(), 2);
/// let root = enumerator.locate_class_root("com.example.Foo").unwrap().unwrap();
/// assert_eq!(root.locator().as_str(), "/opt/app/classes");
/// ```
#[derive(Clone, Copy)]
pub struct RootEnumerator<'a> {
    layers: Option<&'a dyn Layer>,
    lookup: Option<&'a dyn ResourceLookup>,
    path_list: Option<&'a str>,
    separator: char,
    matcher: Matcher,
}

impl Default for RootEnumerator<'_> {
    fn default() -> Self {
        Self {
            layers: None,
            lookup: None,
            path_list: None,
            separator: DEFAULT_PATH_LIST_SEPARATOR,
            matcher: Matcher::new(),
        }
    }
}

impl<'a> RootEnumerator<'a> {
    /// An enumerator with no layers, no path-list, and the directory lookup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk the chain starting at `innermost`.
    #[must_use]
    pub fn with_layers(mut self, innermost: &'a dyn Layer) -> Self {
        self.layers = Some(innermost);
        self
    }

    /// Answer resource queries with `lookup`.
    ///
    /// Without one, resources are looked up in the directory roots of the
    /// current root set (see [`DirectoryLookup`]).
    #[must_use]
    pub fn with_lookup(mut self, lookup: &'a dyn ResourceLookup) -> Self {
        self.lookup = Some(lookup);
        self
    }

    /// Fall back to `path_list` when the layers yield no roots.
    #[must_use]
    pub fn with_path_list(mut self, path_list: &'a str) -> Self {
        self.path_list = Some(path_list);
        self
    }

    /// Split the path-list on `separator` instead of the platform default.
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Select how resources are matched to roots.
    #[must_use]
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.matcher = self.matcher.with_mode(mode);
        self
    }

    /// The matcher used for root queries.
    #[must_use]
    pub fn matcher(&self) -> Matcher {
        self.matcher
    }

    /// The ordered, deduplicated roots currently in effect.
    ///
    /// An empty set is a valid answer: no enumerable layer had roots and no
    /// path-list was given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resolution`] naming the offending segment when the
    /// fallback path-list holds a segment that cannot be made into a root.
    pub fn current_roots(&self) -> Result<RootSet> {
        let mut discovered = Vec::new();

        for layer in LayerChain::new(self.layers) {
            match layer.roots() {
                Some(roots) => {
                    log::debug!("layer '{}' exposes {} root(s)", layer.name(), roots.len());
                    discovered.extend(roots);
                }
                None => log::debug!("layer '{}' does not enumerate roots; skipping", layer.name()),
            }
        }

        if discovered.is_empty() {
            if let Some(path_list) = self.path_list {
                log::debug!("no layer roots; falling back to path-list");
                discovered = split_path_list(path_list, self.separator)?;
            }
        }

        Ok(RootSet::from_locators(discovered))
    }

    /// Every resource visible under a namespace prefix.
    ///
    /// `com.example` and `com/example` are the same prefix. An empty list
    /// means no layer exposes that path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resolution`] carrying the prefix when the lookup
    /// fails, and propagates root enumeration errors when the directory
    /// lookup is in use.
    pub fn resources_for_prefix(&self, prefix: &str) -> Result<Vec<Locator>> {
        match self.lookup {
            Some(lookup) => find_under_prefix(lookup, prefix),
            None => find_under_prefix(&DirectoryLookup::new(self.current_roots()?), prefix),
        }
    }

    /// The roots owning every resource under a namespace prefix.
    ///
    /// One root per resource, in resource order. A resource outside every
    /// known root comes back as its own root.
    ///
    /// # Errors
    ///
    /// Same as [`resources_for_prefix`](Self::resources_for_prefix) and
    /// [`current_roots`](Self::current_roots).
    pub fn roots_for_prefix(&self, prefix: &str) -> Result<Vec<Root>> {
        let roots = self.current_roots()?;
        let resources = match self.lookup {
            Some(lookup) => find_under_prefix(lookup, prefix)?,
            None => find_under_prefix(&DirectoryLookup::new(roots.clone()), prefix)?,
        };
        Ok(self
            .matcher
            .best_matching_roots(&resources, roots.as_slice()))
    }

    /// The root holding a type, given its qualified name (`com.example.Foo`).
    ///
    /// Returns `Ok(None)` when the type's resource cannot be found.
    ///
    /// # Errors
    ///
    /// Propagates root enumeration errors.
    pub fn locate_class_root(&self, qualified_name: &str) -> Result<Option<Root>> {
        self.locate_resource_root(&type_name_to_resource_path(qualified_name))
    }

    /// The root holding the first resource visible at `relative`.
    ///
    /// Returns `Ok(None)` when no such resource is visible.
    ///
    /// # Errors
    ///
    /// Propagates root enumeration errors. With an explicit lookup, roots are
    /// only enumerated once a resource has been found, so an absent resource
    /// is `Ok(None)` whatever state the path-list is in.
    pub fn locate_resource_root(&self, relative: &str) -> Result<Option<Root>> {
        let located = match self.lookup {
            Some(lookup) => match lookup.find_resource(relative) {
                Some(resource) => Some((resource, self.current_roots()?)),
                None => None,
            },
            None => {
                let roots = self.current_roots()?;
                DirectoryLookup::new(roots.clone())
                    .find_resource(relative)
                    .map(|resource| (resource, roots))
            }
        };

        let Some((resource, roots)) = located else {
            log::debug!("no resource visible at '{relative}'");
            return Ok(None);
        };

        Ok(Some(self.matcher.best_match(&resource, roots.as_slice())))
    }

    /// The current root a locator belongs to, or the locator itself.
    ///
    /// # Errors
    ///
    /// Propagates root enumeration errors.
    pub fn base_root(&self, locator: &Locator) -> Result<Root> {
        let roots = self.current_roots()?;
        Ok(self.matcher.best_match(locator, roots.as_slice()))
    }
}

fn find_under_prefix(lookup: &dyn ResourceLookup, prefix: &str) -> Result<Vec<Locator>> {
    let relative = namespace_to_relative_path(prefix);
    lookup
        .find_resources(&relative)
        .map_err(|e| Error::resolution(prefix, format!("resource lookup failed: {e}")))
}

/// Read a path-list from an environment variable.
///
/// An unset or non-UTF-8 variable means there is no path-list.
#[must_use]
pub fn path_list_from_env(var: &str) -> Option<String> {
    env::var(var).ok()
}

/// Split a path-list into root locators.
///
/// An empty string is no path-list at all and yields no locators. Otherwise
/// every segment must convert, including empty segments between adjacent
/// separators, which are rejected.
///
/// # Errors
///
/// Returns [`Error::Resolution`] naming the first segment that cannot be
/// converted.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use rootscope::enumerate::split_path_list;
///
/// let locators = split_path_list("/x:/y", ':').unwrap();
/// assert_eq!(locators.len(), 2);
/// assert_eq!(locators[0].as_str(), "/x");
///
/// let err = split_path_list("/x::/y", ':').unwrap_err();
/// assert!(err.is_resolution());
/// # }
/// ```
pub fn split_path_list(path_list: &str, separator: char) -> Result<Vec<Locator>> {
    if path_list.is_empty() {
        return Ok(Vec::new());
    }

    path_list
        .split(separator)
        .map(|segment| {
            segment_to_locator(segment).map_err(|e| {
                let reason = match e {
                    Error::InvalidPath { reason, .. } => reason,
                    other => other.to_string(),
                };
                Error::resolution(segment, reason)
            })
        })
        .collect()
}

/// Turn a namespace prefix into a relative resource path.
///
/// # Examples
///
/// ```
/// use rootscope::enumerate::namespace_to_relative_path;
///
/// assert_eq!(namespace_to_relative_path("com.example"), "com/example");
/// assert_eq!(namespace_to_relative_path("com/example/"), "com/example");
/// ```
#[must_use]
pub fn namespace_to_relative_path(prefix: &str) -> String {
    prefix.replace('.', "/").trim_matches('/').to_string()
}

/// Turn a qualified type name into the relative path of its resource.
///
/// # Examples
///
/// ```
/// use rootscope::enumerate::type_name_to_resource_path;
///
/// assert_eq!(
///     type_name_to_resource_path("com.example.Outer$Inner"),
///     "com/example/Outer$Inner.class"
/// );
/// ```
#[must_use]
pub fn type_name_to_resource_path(qualified_name: &str) -> String {
    format!("{}{TYPE_RESOURCE_SUFFIX}", qualified_name.replace('.', "/"))
}
