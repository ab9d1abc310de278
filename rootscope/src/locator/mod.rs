//! Locators, their normalized form, and root matching.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! A runtime describes the same place in many ways: `/opt/app.jar`,
//! `file:/opt/app.jar`, `jar:file:/opt/app.jar!/`. Normalization maps all of
//! them to one comparison string (see [`normalize`](normalize::normalize)).
//! It is a pure function of its input.
//!
//! ## Boundary-safe containment
//!
//! A root contains a locator only when the locator equals the root or
//! continues it past a separator. `/a/b` never contains `/a/bc`.
//!
//! ## Matching
//!
//! [`Matcher`] maps resource locators back onto roots. In the default
//! [`MatchMode::FirstMatch`] the first containing root in candidate order
//! wins; [`MatchMode::LongestPrefix`] picks the most specific one.
//!
//! # Examples
//!
//! ```
//! use rootscope::locator::{Locator, Matcher, RootSet};
//!
//! let roots: RootSet = ["file:/opt/classes/", "/opt/lib/app.jar"]
//!     .into_iter()
//!     .map(Locator::from)
//!     .collect();
//!
//! let class = Locator::from("jar:file:/opt/lib/app.jar!/com/example/Foo.class");
//! let owner = Matcher::new().best_match(&class, roots.as_slice());
//! assert_eq!(owner.locator().as_str(), "/opt/lib/app.jar");
//! ```

pub mod absolute;
pub mod matcher;
pub mod normalize;
pub mod relationship;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use matcher::{best_matching_root, best_matching_roots, MatchMode, Matcher};
pub use relationship::PathRelationship;
pub use types::{Locator, NormalizedPath, Root, RootSet};
