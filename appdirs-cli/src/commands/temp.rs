//! Command to manage the application temp directory.

use crate::error::CliError;
use crate::utils::{build_registry, GlobalOptions};
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Create, recreate or remove the application temp directory.
#[derive(Args)]
pub struct TempCommand {
    #[command(subcommand)]
    pub action: TempAction,
}

/// Temp directory actions.
#[derive(Subcommand)]
pub enum TempAction {
    /// Create the temp directory if it does not exist
    Create,

    /// Delete and recreate a subdirectory (or the whole temp directory)
    Recreate {
        /// Subdirectory of the temp directory
        #[arg(value_name = "SUBDIR")]
        subdir: Option<PathBuf>,
    },

    /// Remove a subdirectory (or the whole temp directory)
    Remove {
        /// Subdirectory of the temp directory
        #[arg(value_name = "SUBDIR")]
        subdir: Option<PathBuf>,
    },
}

impl TempCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let dirs = build_registry(global)?;

        match self.action {
            TempAction::Create => dirs.create_temp()?,
            TempAction::Recreate { subdir } => dirs.recreate_temp(subdir.unwrap_or_default())?,
            TempAction::Remove { subdir } => dirs.remove_temp(subdir.unwrap_or_default())?,
        }

        if let Some(temp) = dirs.temp() {
            log::info!("temp directory: {}", temp.display());
        }
        Ok(())
    }
}
