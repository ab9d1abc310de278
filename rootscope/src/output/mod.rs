//! Output formatting for roots and resource locators.
//!
//! This module renders query results as human-readable lines, as JSON, or
//! joined back into a path-list.

mod formatters;

use std::fmt;
use std::str::FromStr;

use crate::locator::{Locator, Root};
use crate::Result;

pub use formatters::{JsonFormatter, PathListFormatter, TextFormatter};

/// Trait for formatting query results into different output formats.
pub trait OutputFormatter {
    /// Format roots, showing each root as it was discovered.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_roots(&self, roots: &[Root]) -> Result<String>;

    /// Format resource locators.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_locators(&self, locators: &[Locator]) -> Result<String>;

    /// Format roots, showing each root's normalized form.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_normalized(&self, roots: &[Root]) -> Result<String>;
}

/// Available output formats.
///
/// # Examples
///
/// ```
/// use rootscope::output::OutputFormat;
/// use rootscope::Root;
///
/// let roots = vec![Root::new("file:/opt/app/classes/"), Root::new("/opt/lib/dep.jar")];
///
/// let text = OutputFormat::Text.create_formatter().format_roots(&roots).unwrap();
/// assert_eq!(text, "file:/opt/app/classes/\n/opt/lib/dep.jar");
///
/// let joined = OutputFormat::PathList(':').create_formatter().format_normalized(&roots).unwrap();
/// assert_eq!(joined, "/opt/app/classes:/opt/lib/dep.jar");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One entry per line.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// Entries joined with a separator into a single path-list.
    PathList(char),
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::PathList(separator) => Box::new(PathListFormatter::new(*separator)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::PathList(_) => write!(f, "path-list"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    /// Parses `text` and `json`. `path-list` uses the platform separator.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "path-list" => Ok(Self::PathList(crate::enumerate::DEFAULT_PATH_LIST_SEPARATOR)),
            _ => Err(format!(
                "invalid output format: {s} (expected text, json or path-list)"
            )),
        }
    }
}
