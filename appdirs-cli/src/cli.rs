//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    ExpandCommand, ParameterizeCommand, RelativizeCommand, RootCommand, ShowCommand, TempCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for resolving application directories.
#[derive(Parser)]
#[command(name = "appdirs")]
#[command(version, about = "Resolve and parameterize application directories", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Application name used for default directory locations
    #[arg(
        long,
        value_name = "NAME",
        global = true,
        env = "APPDIRS_APP_NAME",
        default_value = "appdirs"
    )]
    pub app_name: String,

    /// YAML file with directory paths and aliases
    #[arg(long, value_name = "PATH", global = true, env = "APPDIRS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base path for relative inputs (defaults to the workspace directory)
    #[arg(long, value_name = "PATH", global = true)]
    pub base: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the registered directories and their aliases
    Show(ShowCommand),

    /// Expand keywords in a path and make it absolute
    Expand(ExpandCommand),

    /// Expand keywords in a path and make it relative to the base path
    Relativize(RelativizeCommand),

    /// Replace directory prefixes in a path with their keywords
    Parameterize(ParameterizeCommand),

    /// Print the workspace root
    Root(RootCommand),

    /// Manage the application's temp directory
    Temp(TempCommand),
}
