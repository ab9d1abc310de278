//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, LocateCommand, MatchCommand, NormalizeCommand, PrefixRootsCommand,
    ResourcesCommand, RootsCommand, ValidateCommand,
};
use clap::{Parser, Subcommand, ValueEnum};
use rootscope::output::OutputFormat;
use std::path::PathBuf;

/// Command-line tool for inspecting search roots and the resources they own.
#[derive(Parser)]
#[command(name = "rootscope")]
#[command(
    version,
    about = "Enumerate search roots and map resources back to them",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read an additional configuration file
    #[arg(long, value_name = "PATH", global = true, env = "ROOTSCOPE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Use this path-list instead of the configured environment variable
    #[arg(long, value_name = "LIST", global = true)]
    pub path_list: Option<String>,

    /// Separator between path-list entries
    #[arg(long, value_name = "CHAR", global = true)]
    pub separator: Option<char>,

    /// Match resources to the most specific containing root
    #[arg(long, global = true)]
    pub longest_prefix: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Text, global = true)]
    pub format: FormatArg,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// One entry per line
    Text,
    /// Pretty-printed JSON
    Json,
    /// Entries joined into a single path-list
    PathList,
}

impl FormatArg {
    /// Convert to `OutputFormat`, joining path-lists with `separator`.
    pub fn to_output_format(self, separator: char) -> OutputFormat {
        match self {
            Self::Text => OutputFormat::Text,
            Self::Json => OutputFormat::Json,
            Self::PathList => OutputFormat::PathList(separator),
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List the roots currently in effect
    Roots(RootsCommand),

    /// List resources visible under a namespace prefix
    Resources(ResourcesCommand),

    /// List the roots owning resources under a namespace prefix
    PrefixRoots(PrefixRootsCommand),

    /// Find the root holding a type or resource
    Locate(LocateCommand),

    /// Find the root a locator belongs to
    Match(MatchCommand),

    /// Print the normalized form of locators
    Normalize(NormalizeCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
