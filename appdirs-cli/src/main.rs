//! Main entry point for the appdirs CLI.
//!
//! Resolves application directories and translates paths between their
//! concrete and keyword forms:
//! - `show`: List the registered directories
//! - `expand`: Expand keywords into an absolute path
//! - `relativize`: Expand keywords and relativize against the base path
//! - `parameterize`: Replace directory prefixes with keywords
//! - `root`: Print the workspace root
//! - `temp`: Manage the application's temp directory

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    appdirs::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        app_name: cli.app_name,
        config: cli.config,
        base: cli.base,
    };

    let result = match cli.command {
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::Expand(cmd) => cmd.execute(&global),
        cli::Command::Relativize(cmd) => cmd.execute(&global),
        cli::Command::Parameterize(cmd) => cmd.execute(&global),
        cli::Command::Root(cmd) => cmd.execute(&global),
        cli::Command::Temp(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
