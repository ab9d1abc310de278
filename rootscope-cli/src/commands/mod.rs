//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `roots`: List the roots currently in effect
//! - `resources`: List resources under a namespace prefix
//! - `prefix_roots`: List the roots owning resources under a prefix
//! - `locate`: Find the root holding a type or resource
//! - `match_cmd`: Find the root a locator belongs to
//! - `normalize`: Print normalized forms of locators
//! - `validate`: Validate configuration file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod locate;
pub mod match_cmd;
pub mod normalize;
pub mod prefix_roots;
pub mod resources;
pub mod roots;
pub mod validate;

pub use completions::CompletionsCommand;
pub use locate::LocateCommand;
pub use match_cmd::MatchCommand;
pub use normalize::NormalizeCommand;
pub use prefix_roots::PrefixRootsCommand;
pub use resources::ResourcesCommand;
pub use roots::RootsCommand;
pub use validate::ValidateCommand;
