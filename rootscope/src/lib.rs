#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # rootscope
//!
//! A library for enumerating the roots a runtime searches for resources and
//! mapping any resource back to the root that owns it.
//!
//! Roots are discovered from a chain of layers, falling back to a
//! path-list string when no layer exposes any. Locators are compared in a
//! normalized form that erases the differences between plain paths,
//! `file:` locators and archive-wrapped locators.
//!
//! ## Core Types
//!
//! - [`Locator`], [`Root`] and [`RootSet`]: what is discovered and matched
//! - [`Matcher`] and [`MatchMode`]: mapping resources back to roots
//! - [`RootEnumerator`]: discovery and the queries built on it
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use rootscope::{best_matching_root, Locator, Root};
//!
//! let roots = vec![Root::new("/opt/app/classes"), Root::new("file:/opt/lib/dep.jar")];
//!
//! let resource = Locator::from("jar:file:/opt/lib/dep.jar!/com/example/Foo.class");
//! let owner = best_matching_root(Some(&resource), &roots).unwrap();
//! assert_eq!(owner.locator().as_str(), "file:/opt/lib/dep.jar");
//!
//! // Matching is boundary safe
//! let sibling = Locator::from("/opt/app/classes2/Foo.class");
//! let stray = best_matching_root(Some(&sibling), &roots).unwrap();
//! assert_eq!(stray.locator(), &sibling);
//! ```

pub mod config;
pub mod enumerate;
pub mod error;
pub mod layer;
pub mod locator;
pub mod logging;
pub mod lookup;
pub mod output;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use enumerate::{
    namespace_to_relative_path, split_path_list, type_name_to_resource_path, RootEnumerator,
};
pub use error::{Error, Result};
pub use layer::{Layer, LayerChain, StaticLayer};
pub use locator::{
    best_matching_root, best_matching_roots, Locator, MatchMode, Matcher, NormalizedPath,
    PathRelationship, Root, RootSet,
};
pub use logging::{init_logger, LogLevel, Logger};
pub use lookup::{DirectoryLookup, ResourceLookup, StaticLookup};
