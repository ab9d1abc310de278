//! Configuration schema definitions.
//!
//! This module defines the configuration structure for rootscope: where the
//! fallback path-list comes from, how it is split, how resources are matched
//! to roots, and an optional statically declared layer chain.

use serde::{Deserialize, Serialize};

use crate::enumerate::DEFAULT_PATH_LIST_SEPARATOR;
use crate::layer::StaticLayer;
use crate::locator::MatchMode;

/// Environment variable read for the path-list when none is configured.
pub const DEFAULT_PATH_LIST_VAR: &str = "CLASSPATH";

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered; the accessor
/// methods supply the built-in defaults.
///
/// # Examples
///
/// ```
/// use rootscope::config::{Config, LayerConfig};
/// use rootscope::MatchMode;
///
/// let config = Config {
///     match_mode: Some(MatchMode::LongestPrefix),
///     layers: Some(vec![LayerConfig {
///         name: "app".to_string(),
///         roots: Some(vec!["/opt/app/classes".to_string()]),
///     }]),
///     ..Default::default()
/// };
/// assert_eq!(config.path_list_var(), "CLASSPATH");
/// assert_eq!(config.match_mode(), MatchMode::LongestPrefix);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Environment variable holding the fallback path-list.
    pub path_list_var: Option<String>,

    /// Separator between path-list entries.
    pub path_separator: Option<char>,

    /// How resources are matched to roots.
    pub match_mode: Option<MatchMode>,

    /// Statically declared layers, innermost first.
    pub layers: Option<Vec<LayerConfig>>,
}

/// One statically declared layer.
///
/// A layer without `roots` does not support enumeration and is skipped
/// during discovery.
///
/// ```
/// use rootscope::config::LayerConfig;
///
/// let layer: LayerConfig = serde_yaml::from_str("name: boot\n").unwrap();
/// assert!(layer.roots.is_none());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LayerConfig {
    /// Layer name used in diagnostics.
    pub name: String,

    /// Roots searched by the layer, in order.
    #[serde(default)]
    pub roots: Option<Vec<String>>,
}

impl Config {
    /// The environment variable to read the path-list from.
    #[must_use]
    pub fn path_list_var(&self) -> &str {
        self.path_list_var.as_deref().unwrap_or(DEFAULT_PATH_LIST_VAR)
    }

    /// The path-list separator, defaulting to the platform separator.
    #[must_use]
    pub fn path_separator(&self) -> char {
        self.path_separator.unwrap_or(DEFAULT_PATH_LIST_SEPARATOR)
    }

    /// The configured match mode, defaulting to first-match.
    #[must_use]
    pub fn match_mode(&self) -> MatchMode {
        self.match_mode.unwrap_or_default()
    }

    /// Build the declared layer chain.
    ///
    /// Returns `None` when no layers are declared.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootscope::config::Config;
    /// use rootscope::layer::{Layer, LayerChain};
    ///
    /// let config: Config = serde_yaml::from_str(
    ///     "layers:\n  - name: app\n    roots: [/opt/app]\n  - name: boot\n",
    /// )
    /// .unwrap();
    ///
    /// let chain = config.layer_chain().unwrap();
    /// let names: Vec<&str> = LayerChain::new(Some(&chain)).map(|l| l.name()).collect();
    /// assert_eq!(names, vec!["app", "boot"]);
    /// ```
    #[must_use]
    pub fn layer_chain(&self) -> Option<StaticLayer> {
        let layers = self.layers.as_ref()?;
        StaticLayer::chain(layers.iter().map(LayerConfig::to_layer).collect::<Vec<_>>())
    }
}

impl LayerConfig {
    /// The in-memory layer this declaration describes, without a parent.
    #[must_use]
    pub fn to_layer(&self) -> StaticLayer {
        let layer = StaticLayer::new(self.name.clone());
        match &self.roots {
            Some(roots) => layer.with_roots(roots.iter().map(String::as_str)),
            None => layer.opaque(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::Layer;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.path_list_var(), DEFAULT_PATH_LIST_VAR);
        assert_eq!(config.path_separator(), DEFAULT_PATH_LIST_SEPARATOR);
        assert_eq!(config.match_mode(), MatchMode::FirstMatch);
        assert!(config.layer_chain().is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
path_list_var: APP_PATH
path_separator: ";"
match_mode: longest-prefix
layers:
  - name: app
    roots:
      - /opt/app/classes
      - jar:file:/opt/app/lib/dep.jar!/
  - name: platform
  - name: boot
    roots: []
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.path_list_var(), "APP_PATH");
        assert_eq!(config.path_separator(), ';');
        assert_eq!(config.match_mode(), MatchMode::LongestPrefix);

        let layers = config.layers.as_ref().unwrap();
        assert_eq!(layers.len(), 3);
        assert_eq!(layers[0].roots.as_ref().unwrap().len(), 2);
        assert!(layers[1].roots.is_none());
        assert_eq!(layers[2].roots, Some(Vec::new()));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("classpath: /x\n");
        assert!(result.is_err());

        let result: Result<Config, _> =
            serde_yaml::from_str("layers:\n  - name: a\n    parent: b\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_match_mode_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("match_mode: nearest\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_layer_chain_preserves_opacity() {
        let config = Config {
            layers: Some(vec![
                LayerConfig {
                    name: "app".into(),
                    roots: Some(vec!["/a".into()]),
                },
                LayerConfig {
                    name: "boot".into(),
                    roots: None,
                },
            ]),
            ..Default::default()
        };

        let chain = config.layer_chain().unwrap();
        assert_eq!(chain.name(), "app");
        assert_eq!(chain.roots().unwrap().len(), 1);
        let parent = chain.parent().unwrap();
        assert_eq!(parent.name(), "boot");
        assert!(parent.roots().is_none());
        assert!(parent.parent().is_none());
    }

    #[test]
    fn test_empty_layer_list_is_no_chain() {
        let config = Config {
            layers: Some(Vec::new()),
            ..Default::default()
        };
        assert!(config.layer_chain().is_none());
    }

    #[test]
    fn test_round_trip_through_yaml() {
        let config = Config {
            path_list_var: Some("APP_PATH".into()),
            path_separator: Some(','),
            match_mode: Some(MatchMode::FirstMatch),
            layers: None,
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, config);
    }
}
