//! Utility functions for CLI operations.
//!
//! This module provides the plumbing shared by CLI commands: configuration
//! loading, assembling an enumerator from it, and printing results.

use crate::cli::FormatArg;
use crate::error::CliError;
use rootscope::enumerate::path_list_from_env;
use rootscope::output::OutputFormatter;
use rootscope::{Config, ConfigBuilder, MatchMode, RootEnumerator, StaticLayer};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // `verbose` only feeds logger setup in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Additional configuration file.
    pub config: Option<PathBuf>,

    /// Explicit path-list, overriding the environment.
    pub path_list: Option<String>,

    /// Path-list separator override.
    pub separator: Option<char>,

    /// Use longest-prefix matching.
    pub longest_prefix: bool,

    /// Output format.
    pub format: FormatArg,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. The `--config` file
/// 4. Discovered configuration files
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        if !path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        builder = builder.with_config_file(path);
    }

    let overrides = Config {
        path_separator: global.separator,
        match_mode: global.longest_prefix.then_some(MatchMode::LongestPrefix),
        ..Default::default()
    };

    Ok(builder.with_config(overrides).build()?)
}

/// Everything a query command needs, resolved once per invocation.
pub struct Session {
    config: Config,
    layers: Option<StaticLayer>,
    path_list: Option<String>,
}

impl Session {
    /// Load configuration and resolve the path-list.
    ///
    /// The `--path-list` option wins over the environment variable named
    /// by the configuration.
    pub fn load(global: &GlobalOptions) -> Result<Self, CliError> {
        let config = load_configuration(global)?;
        let layers = config.layer_chain();
        let path_list = global
            .path_list
            .clone()
            .or_else(|| path_list_from_env(config.path_list_var()));

        match &path_list {
            Some(_) => log::debug!("using path-list ({})", config.path_list_var()),
            None => log::debug!("no path-list; {} is unset", config.path_list_var()),
        }

        Ok(Self {
            config,
            layers,
            path_list,
        })
    }

    /// An enumerator over the configured layers and path-list.
    ///
    /// Resources are looked up in the directory roots on disk.
    pub fn enumerator(&self) -> RootEnumerator<'_> {
        let mut enumerator = RootEnumerator::new()
            .with_separator(self.config.path_separator())
            .with_match_mode(self.config.match_mode());

        if let Some(ref layers) = self.layers {
            enumerator = enumerator.with_layers(layers);
        }
        if let Some(ref path_list) = self.path_list {
            enumerator = enumerator.with_path_list(path_list);
        }

        enumerator
    }

    /// The formatter for the selected output format.
    pub fn formatter(&self, global: &GlobalOptions) -> Box<dyn OutputFormatter> {
        global
            .format
            .to_output_format(self.config.path_separator())
            .create_formatter()
    }
}

/// Print formatted output, skipping empty results.
pub fn print_output(output: &str) {
    if !output.is_empty() {
        println!("{output}");
    }
}
