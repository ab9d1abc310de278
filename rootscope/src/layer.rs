//! The layered chain of root providers.
//!
//! A runtime usually resolves resources through nested loaders: an
//! application layer delegating to a platform layer delegating to a boot
//! layer. Each [`Layer`] may expose the roots it searches, or may not support
//! enumeration at all, and may point at a parent layer.

use crate::locator::Locator;

/// One level of a loader chain.
///
/// # Examples
///
/// ```
/// use rootscope::layer::{Layer, StaticLayer};
///
/// let boot = StaticLayer::new("boot").opaque();
/// let app = StaticLayer::new("app")
///     .with_roots(["/opt/app/classes"])
///     .with_parent(boot);
///
/// assert_eq!(app.roots().unwrap().len(), 1);
/// assert!(app.parent().unwrap().roots().is_none());
/// ```
pub trait Layer {
    /// Name used in diagnostics.
    fn name(&self) -> &str;

    /// Roots searched by this layer, in its own order.
    ///
    /// `None` means this layer cannot enumerate its roots; it is skipped
    /// during discovery rather than treated as an error.
    fn roots(&self) -> Option<Vec<Locator>>;

    /// The layer this one delegates to. The outermost layer has none.
    fn parent(&self) -> Option<&dyn Layer>;
}

/// Iterator over a layer and all of its ancestors, innermost first.
pub struct LayerChain<'a> {
    next: Option<&'a dyn Layer>,
}

impl<'a> LayerChain<'a> {
    /// Start a walk at `innermost`.
    #[must_use]
    pub fn new(innermost: Option<&'a dyn Layer>) -> Self {
        Self { next: innermost }
    }
}

impl<'a> Iterator for LayerChain<'a> {
    type Item = &'a dyn Layer;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}

/// An in-memory layer.
#[derive(Debug, Clone)]
pub struct StaticLayer {
    name: String,
    roots: Option<Vec<Locator>>,
    parent: Option<Box<StaticLayer>>,
}

impl StaticLayer {
    /// An enumerable layer with no roots and no parent.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roots: Some(Vec::new()),
            parent: None,
        }
    }

    /// Replace the roots of this layer.
    #[must_use]
    pub fn with_roots<I, L>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Locator>,
    {
        self.roots = Some(roots.into_iter().map(Into::into).collect());
        self
    }

    /// Mark this layer as not supporting enumeration.
    #[must_use]
    pub fn opaque(mut self) -> Self {
        self.roots = None;
        self
    }

    /// Set the parent layer.
    #[must_use]
    pub fn with_parent(mut self, parent: StaticLayer) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// Build a chain from layers listed innermost first.
    ///
    /// Returns `None` for an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootscope::layer::{Layer, LayerChain, StaticLayer};
    ///
    /// let chain = StaticLayer::chain([
    ///     StaticLayer::new("app"),
    ///     StaticLayer::new("platform"),
    /// ])
    /// .unwrap();
    ///
    /// let names: Vec<&str> = LayerChain::new(Some(&chain)).map(|l| l.name()).collect();
    /// assert_eq!(names, vec!["app", "platform"]);
    /// ```
    pub fn chain<I>(layers: I) -> Option<StaticLayer>
    where
        I: IntoIterator<Item = StaticLayer>,
        I::IntoIter: DoubleEndedIterator,
    {
        layers.into_iter().rev().fold(None, |parent, layer| {
            Some(match parent {
                Some(parent) => layer.with_parent(parent),
                None => layer,
            })
        })
    }
}

impl Layer for StaticLayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn roots(&self) -> Option<Vec<Locator>> {
        self.roots.clone()
    }

    fn parent(&self) -> Option<&dyn Layer> {
        self.parent.as_deref().map(|parent| parent as &dyn Layer)
    }
}
