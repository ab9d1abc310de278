//! Command to list the roots currently in effect.

use crate::error::CliError;
use crate::utils::{print_output, GlobalOptions, Session};
use clap::Args;

/// List the roots currently in effect, innermost layer first.
#[derive(Args)]
pub struct RootsCommand {
    /// Show each root's normalized form instead of its discovered form
    #[arg(long)]
    pub normalized: bool,
}

impl RootsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::load(global)?;
        let roots = session.enumerator().current_roots()?;

        if roots.is_empty() && !global.quiet {
            eprintln!("No roots in effect");
        }

        let formatter = session.formatter(global);
        let output = if self.normalized {
            formatter.format_normalized(roots.as_slice())?
        } else {
            formatter.format_roots(roots.as_slice())?
        };

        print_output(&output);
        Ok(())
    }
}
