//! Command to show the registered directories.

use crate::error::CliError;
use crate::utils::{build_registry, GlobalOptions};
use appdirs::{Dir, DirKind};
use clap::Args;
use serde::Serialize;

/// Show the registered directories and their aliases.
#[derive(Args)]
pub struct ShowCommand {
    /// Only show this directory (cache, config, home, workspace, temp)
    #[arg(value_name = "KIND")]
    pub kind: Option<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    app_name: &'a str,
    dirs: Vec<&'a Dir>,
}

impl ShowCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let kind = self
            .kind
            .as_deref()
            .map(str::parse::<DirKind>)
            .transpose()
            .map_err(CliError::InvalidArguments)?;

        let registry = build_registry(global)?;
        let dirs: Vec<&Dir> = registry
            .dirs()
            .filter(|dir| kind.map_or(true, |k| dir.kind() == k))
            .collect();

        if self.json {
            let output = ShowOutput {
                app_name: &global.app_name,
                dirs,
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::Io(e.into()))?;
            println!("{json}");
            return Ok(());
        }

        if kind.is_some() {
            for dir in dirs {
                println!("{}", dir.path().display());
            }
            return Ok(());
        }

        for dir in dirs {
            let aliases = dir.aliases().join(" ");
            println!("{:<10} {}  {}", dir.kind(), dir.path().display(), aliases);
        }
        Ok(())
    }
}
