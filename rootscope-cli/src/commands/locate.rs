//! Command to find the root holding a type or resource.

use crate::error::CliError;
use crate::utils::{print_output, GlobalOptions, Session};
use clap::Args;

/// Find the root holding a type, given its qualified name.
///
/// Exits with status 1 when nothing is found.
#[derive(Args)]
pub struct LocateCommand {
    /// Qualified type name (`com.example.Foo`), or a resource path with `--resource`
    #[arg(value_name = "TYPE_NAME")]
    pub name: String,

    /// Treat the argument as a relative resource path
    #[arg(long)]
    pub resource: bool,
}

impl LocateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::load(global)?;
        let enumerator = session.enumerator();

        let located = if self.resource {
            enumerator.locate_resource_root(&self.name)?
        } else {
            enumerator.locate_class_root(&self.name)?
        };

        let Some(root) = located else {
            return Err(CliError::SemanticFailure(format!(
                "No root holds '{}'",
                self.name
            )));
        };

        print_output(&session.formatter(global).format_roots(&[root])?);
        Ok(())
    }
}
