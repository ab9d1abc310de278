//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `ROOTSCOPE_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::locator::MatchMode;
use std::env;

/// Overrides the environment variable holding the path-list.
pub const PATH_LIST_VAR_ENV: &str = "ROOTSCOPE_PATH_LIST_VAR";

/// Overrides the path-list separator.
pub const PATH_SEPARATOR_ENV: &str = "ROOTSCOPE_PATH_SEPARATOR";

/// Overrides the match mode.
pub const MATCH_MODE_ENV: &str = "ROOTSCOPE_MATCH_MODE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use rootscope::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (a separator longer than one character, an unknown match mode).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(var) = env::var(PATH_LIST_VAR_ENV) {
            config.path_list_var = Some(var);
        }

        if let Ok(separator) = env::var(PATH_SEPARATOR_ENV) {
            config.path_separator = Some(Self::parse_separator(PATH_SEPARATOR_ENV, &separator)?);
        }

        if let Ok(mode) = env::var(MATCH_MODE_ENV) {
            config.match_mode = Some(Self::parse_match_mode(MATCH_MODE_ENV, &mode)?);
        }

        Ok(())
    }

    /// Parse a single-character separator.
    ///
    /// # Errors
    ///
    /// Returns a validation error unless `s` is exactly one character.
    pub fn parse_separator(field: &str, s: &str) -> Result<char> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("Separator must be a single character, got '{s}'"),
            }),
        }
    }

    fn parse_match_mode(field: &str, s: &str) -> Result<MatchMode> {
        s.parse().map_err(|message| Error::Validation {
            field: field.into(),
            message,
        })
    }
}
