//! Error types for the rootscope library.
//!
//! This module provides the error hierarchy for root enumeration, resource
//! lookup and configuration, using `thiserror` for ergonomic error handling.
//!
//! Note that "nothing found" is never represented here: empty root sets,
//! empty resource lists and absent matches are ordinary results.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a rootscope error.
///
/// # Examples
///
/// ```
/// use rootscope::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the rootscope library.
#[derive(Debug, Error)]
pub enum Error {
    /// The environment could not be turned into roots or resources.
    ///
    /// Raised for a fallback path-list segment that cannot be converted into
    /// a locator, and for a resource lookup that fails at the I/O level.
    #[error("cannot resolve '{input}': {reason}")]
    Resolution {
        /// The offending input (path-list segment or namespace prefix).
        input: String,
        /// Why it could not be resolved.
        reason: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Build a resolution error for the given input.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootscope::Error;
    ///
    /// let err = Error::resolution("lib/missing", "segment is empty");
    /// assert!(err.is_resolution());
    /// assert_eq!(err.input(), Some("lib/missing"));
    /// ```
    pub fn resolution(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Resolution {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a resolution error.
    #[must_use]
    pub fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolution { .. })
    }

    /// The offending input carried by a resolution error.
    #[must_use]
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::Resolution { input, .. } => Some(input),
            _ => None,
        }
    }
}
