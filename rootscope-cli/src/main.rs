//! Main entry point for the rootscope CLI.
//!
//! This is the command-line interface for inspecting search roots:
//! - `roots`: List the roots currently in effect
//! - `resources` / `prefix-roots`: Query a namespace prefix
//! - `locate`: Find the root holding a type
//! - `match` / `normalize`: Work with individual locators

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use std::process::ExitCode;
use utils::GlobalOptions;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _logger = rootscope::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        path_list: cli.path_list,
        separator: cli.separator,
        longest_prefix: cli.longest_prefix,
        format: cli.format,
    };

    let result = match cli.command {
        cli::Command::Roots(cmd) => cmd.execute(&global),
        cli::Command::Resources(cmd) => cmd.execute(&global),
        cli::Command::PrefixRoots(cmd) => cmd.execute(&global),
        cli::Command::Locate(cmd) => cmd.execute(&global),
        cli::Command::Match(cmd) => cmd.execute(&global),
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
