//! Command to expand keywords and relativize against the base path.

use crate::error::CliError;
use crate::utils::{build_registry, resolve_base, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Expand keywords in a path and make it relative to the base path.
///
/// Paths that cannot be expressed relative to the base are printed in
/// their expanded absolute form.
#[derive(Args)]
pub struct RelativizeCommand {
    /// Path possibly containing keywords
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

impl RelativizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let dirs = build_registry(global)?;
        let base = resolve_base(global, &dirs)?;

        println!("{}", dirs.make_relative(&base, &self.input).display());
        Ok(())
    }
}
