//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use rootscope::config::{Config, ConfigMerger};
///
/// let low = Config { path_list_var: Some("LOW".to_string()), ..Default::default() };
/// let high = Config { path_list_var: Some("HIGH".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.path_list_var, Some("HIGH".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Scalar fields: source overwrites if Some
    /// - Layers: complete replacement, since a chain is only meaningful as a whole
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.path_list_var.is_some() {
            target.path_list_var.clone_from(&source.path_list_var);
        }

        if source.path_separator.is_some() {
            target.path_separator = source.path_separator;
        }

        if source.match_mode.is_some() {
            target.match_mode = source.match_mode;
        }

        if source.layers.is_some() {
            target.layers.clone_from(&source.layers);
        }
    }
}
