//! Command to print the workspace root.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Print the workspace root.
///
/// When the binary is invoked under the application name this is the
/// working directory; otherwise the nearest ancestor holding a `.git`
/// directory.
#[derive(Args)]
pub struct RootCommand {}

impl RootCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let root = appdirs::root(&global.app_name)?;

        println!("{}", root.display());
        Ok(())
    }
}
