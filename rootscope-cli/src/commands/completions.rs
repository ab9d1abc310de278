//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "rootscope";

/// Per-user directory bash-completion loads scripts from.
const BASH_COMPLETIONS_DIR: &str = "~/.local/share/bash-completion/completions";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            print_instructions(self.shell);
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

/// Explain on stderr how to install the generated script.
fn print_instructions(shell: Shell) {
    eprintln!("# Generating {shell} completion script");
    eprintln!("# Run the following command to enable completions:");

    match shell {
        Shell::Bash => {
            eprintln!("#   rootscope completions bash > {BASH_COMPLETIONS_DIR}/rootscope");
            eprintln!("# Or source it directly in ~/.bashrc:");
            eprintln!("#   eval \"$(rootscope completions bash)\"");
        }
        Shell::Zsh => {
            eprintln!("#   rootscope completions zsh > ~/.zsh/completions/_rootscope");
            eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
            eprintln!("# Or add to ~/.zshrc:");
            eprintln!("#   eval \"$(rootscope completions zsh)\"");
        }
        Shell::Fish => {
            eprintln!(
                "#   rootscope completions fish > ~/.config/fish/completions/rootscope.fish"
            );
            eprintln!("# Or add to config.fish:");
            eprintln!("#   rootscope completions fish | source");
        }
        Shell::PowerShell => {
            eprintln!("#   rootscope completions powershell > $PROFILE");
            eprintln!("# Or run:");
            eprintln!("#   rootscope completions powershell | Out-String | Invoke-Expression");
        }
        Shell::Elvish => {
            // No installation convention to suggest
        }
        _ => {
            // Shells added to clap_complete later
        }
    }
    eprintln!();
}
