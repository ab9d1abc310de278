//! Command to print the normalized form of locators.

use crate::error::CliError;
use crate::utils::{print_output, GlobalOptions};
use clap::Args;
use rootscope::Root;

/// Print the normalized comparison form of each locator.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Locators to normalize
    #[arg(value_name = "LOCATOR", required = true)]
    pub locators: Vec<String>,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let roots: Vec<Root> = self.locators.into_iter().map(Root::new).collect();
        let separator = global
            .separator
            .unwrap_or(rootscope::enumerate::DEFAULT_PATH_LIST_SEPARATOR);
        let formatter = global.format.to_output_format(separator).create_formatter();

        print_output(&formatter.format_normalized(&roots)?);
        Ok(())
    }
}
