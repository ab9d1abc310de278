//! Configuration validation.
//!
//! This module checks that configured values are usable before any
//! enumeration is attempted.

use crate::config::schema::{Config, LayerConfig};
use crate::error::{Error, Result};
use std::collections::HashSet;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use rootscope::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns the first validation error found.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref var) = config.path_list_var {
            Self::validate_env_var_name("path_list_var", var)?;
        }

        if let Some(separator) = config.path_separator {
            Self::validate_separator(separator)?;
        }

        if let Some(ref layers) = config.layers {
            Self::validate_layers(layers)?;
        }

        Ok(())
    }

    /// A separator cannot be a path separator, or every root would split.
    fn validate_separator(separator: char) -> Result<()> {
        if separator == '/' || separator == '\\' {
            return Err(Error::Validation {
                field: "path_separator".into(),
                message: format!("'{separator}' is a path separator and cannot split a path-list"),
            });
        }
        if separator.is_whitespace() || separator.is_control() {
            return Err(Error::Validation {
                field: "path_separator".into(),
                message: "Separator must be a visible character".into(),
            });
        }
        Ok(())
    }

    /// Layer names must be non-empty and unique; roots must be non-empty.
    fn validate_layers(layers: &[LayerConfig]) -> Result<()> {
        let mut seen = HashSet::new();

        for (i, layer) in layers.iter().enumerate() {
            let name = layer.name.trim();
            if name.is_empty() {
                return Err(Error::Validation {
                    field: format!("layers[{i}].name"),
                    message: "Cannot be empty or only whitespace".into(),
                });
            }

            if !seen.insert(name) {
                return Err(Error::Validation {
                    field: format!("layers[{i}].name"),
                    message: format!("Duplicate layer name: {name}"),
                });
            }

            for (j, root) in layer.roots.iter().flatten().enumerate() {
                if root.trim().is_empty() {
                    return Err(Error::Validation {
                        field: format!("layers[{i}].roots[{j}]"),
                        message: "Root cannot be empty".into(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Validate environment variable name.
    ///
    /// Ensures the name is non-empty, contains only alphanumeric characters
    /// and underscores, and does not start with a digit.
    fn validate_env_var_name(field: &str, env: &str) -> Result<()> {
        let Some(first_char) = env.chars().next() else {
            return Err(Error::Validation {
                field: field.into(),
                message: "Environment variable name cannot be empty".into(),
            });
        };

        if !env.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Invalid environment variable name (must be alphanumeric + underscore)"
                    .into(),
            });
        }

        if first_char.is_ascii_digit() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Environment variable cannot start with a digit".into(),
            });
        }

        Ok(())
    }
}
