//! Command to list the roots owning resources under a namespace prefix.

use crate::error::CliError;
use crate::utils::{print_output, GlobalOptions, Session};
use clap::Args;
use rootscope::{Root, RootSet};

/// List the root owning each resource under a namespace prefix.
#[derive(Args)]
pub struct PrefixRootsCommand {
    /// Namespace prefix, dotted (`com.example`) or slashed (`com/example`)
    #[arg(value_name = "PREFIX")]
    pub prefix: String,

    /// Collapse repeated roots
    #[arg(long)]
    pub unique: bool,
}

impl PrefixRootsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::load(global)?;
        let mut roots = session.enumerator().roots_for_prefix(&self.prefix)?;

        if self.unique {
            roots = RootSet::from_locators(roots.into_iter().map(Root::into_locator)).into_vec();
        }

        if roots.is_empty() && !global.quiet {
            eprintln!("No resources under '{}'", self.prefix);
        }

        print_output(&session.formatter(global).format_roots(&roots)?);
        Ok(())
    }
}
