//! Command to replace directory prefixes with keywords.

use crate::error::CliError;
use crate::utils::{build_registry, resolve_base, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Replace directory prefixes in a path with their keywords.
#[derive(Args)]
pub struct ParameterizeCommand {
    /// Concrete path to make portable
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

impl ParameterizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let dirs = build_registry(global)?;
        let base = resolve_base(global, &dirs)?;

        println!("{}", dirs.parameterize(&base, &self.input).display());
        Ok(())
    }
}
