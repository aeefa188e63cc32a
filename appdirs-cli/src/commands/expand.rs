//! Command to expand keywords into an absolute path.

use crate::error::CliError;
use crate::utils::{build_registry, resolve_base, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Expand keywords in a path and make it absolute.
#[derive(Args)]
pub struct ExpandCommand {
    /// Path possibly containing keywords such as `$CACHE` or `~`
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

impl ExpandCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let dirs = build_registry(global)?;
        let base = resolve_base(global, &dirs)?;

        println!("{}", dirs.make_absolute(&base, &self.input).display());
        Ok(())
    }
}
