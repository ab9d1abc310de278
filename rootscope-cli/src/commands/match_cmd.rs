//! Command to find the root a locator belongs to.

use crate::error::CliError;
use crate::utils::{print_output, GlobalOptions, Session};
use clap::Args;
use rootscope::{Locator, Root};

/// Find the root a locator belongs to.
///
/// A locator outside every candidate root is printed back as its own root.
#[derive(Args)]
pub struct MatchCommand {
    /// Resource locator to match
    #[arg(value_name = "LOCATOR")]
    pub locator: String,

    /// Candidate root, in priority order (defaults to the current roots)
    #[arg(long = "root", value_name = "ROOT")]
    pub roots: Vec<String>,
}

impl MatchCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::load(global)?;
        let enumerator = session.enumerator();
        let locator = Locator::new(self.locator);

        let candidates: Vec<Root> = if self.roots.is_empty() {
            enumerator.current_roots()?.into_vec()
        } else {
            self.roots.into_iter().map(Root::new).collect()
        };

        let owner = enumerator.matcher().best_match(&locator, &candidates);
        if owner.locator() == &locator {
            log::debug!("'{locator}' is outside every candidate root");
        }

        print_output(&session.formatter(global).format_roots(&[owner])?);
        Ok(())
    }
}
