//! Command to validate a rootscope configuration file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use rootscope::config::{Config, ConfigLoader, ConfigValidator};
use std::path::PathBuf;

/// Validate a rootscope configuration file on its own, without merging it
/// with any other source.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !self.config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        let config = ConfigLoader::load_file(&self.config_path).map_err(|e| {
            eprintln!("Parse error: {e}");
            CliError::SemanticFailure("Configuration file is invalid".to_string())
        })?;

        ConfigValidator::validate(&config).map_err(|e| {
            eprintln!("Validation error: {e}");
            CliError::SemanticFailure("Configuration validation failed".to_string())
        })?;

        if !global.quiet {
            println!("Configuration is valid");
            for line in summarize(&config) {
                println!("  {line}");
            }
        }
        Ok(())
    }
}

/// One line per setting the file resolves to, layers innermost first.
fn summarize(config: &Config) -> Vec<String> {
    let mut lines = vec![
        format!("path-list variable: {}", config.path_list_var()),
        format!("separator: '{}'", config.path_separator()),
        format!("match mode: {}", config.match_mode()),
    ];

    for layer in config.layers.iter().flatten() {
        lines.push(match &layer.roots {
            Some(roots) => format!("layer '{}': {} root(s)", layer.name, roots.len()),
            None => format!("layer '{}': opaque", layer.name),
        });
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use rootscope::config::LayerConfig;
    use rootscope::MatchMode;

    #[test]
    fn test_summarize_lists_layers_in_order() {
        let config = Config {
            path_list_var: Some("APP_PATH".into()),
            path_separator: Some(';'),
            match_mode: Some(MatchMode::LongestPrefix),
            layers: Some(vec![
                LayerConfig {
                    name: "app".into(),
                    roots: Some(vec!["/opt/app".into(), "/opt/lib".into()]),
                },
                LayerConfig {
                    name: "boot".into(),
                    roots: None,
                },
            ]),
        };

        assert_eq!(
            summarize(&config),
            vec![
                "path-list variable: APP_PATH",
                "separator: ';'",
                "match mode: longest-prefix",
                "layer 'app': 2 root(s)",
                "layer 'boot': opaque",
            ]
        );
    }
}
