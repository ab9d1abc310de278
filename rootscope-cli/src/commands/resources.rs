//! Command to list resources visible under a namespace prefix.

use crate::error::CliError;
use crate::utils::{print_output, GlobalOptions, Session};
use clap::Args;

/// List every resource visible under a namespace prefix.
#[derive(Args)]
pub struct ResourcesCommand {
    /// Namespace prefix, dotted (`com.example`) or slashed (`com/example`)
    #[arg(value_name = "PREFIX")]
    pub prefix: String,
}

impl ResourcesCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::load(global)?;
        let resources = session.enumerator().resources_for_prefix(&self.prefix)?;

        if resources.is_empty() && !global.quiet {
            eprintln!("No resources under '{}'", self.prefix);
        }

        print_output(&session.formatter(global).format_locators(&resources)?);
        Ok(())
    }
}
