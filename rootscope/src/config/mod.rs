//! Configuration system for rootscope.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `rootscope.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`ROOTSCOPE_*`)
//! 3. Explicit files (via `ConfigBuilder::with_config_file`)
//! 4. Project config (nearest `rootscope.yaml`)
//! 5. User config (`~/.rootscope/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use rootscope::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//!
//! println!("path-list variable: {}", config.path_list_var());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use rootscope::config::{Config, ConfigBuilder};
//! use rootscope::MatchMode;
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         match_mode: Some(MatchMode::LongestPrefix),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.match_mode(), MatchMode::LongestPrefix);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, PROJECT_CONFIG_FILE};
pub use merger::ConfigMerger;
pub use schema::{Config, LayerConfig, DEFAULT_PATH_LIST_VAR};
pub use validator::ConfigValidator;
