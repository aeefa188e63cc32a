//! Utility functions for CLI operations.
//!
//! This module builds the directory registry from the global options and
//! resolves the base path used by the transcoding commands.

use crate::error::CliError;
use appdirs::config::{DirsConfig, EnvironmentConfig};
use appdirs::{abs_path, AppDirs, SystemDirs};
use std::env;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // verbosity is consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Application name used for default directory locations.
    pub app_name: String,

    /// Optional YAML configuration file.
    pub config: Option<PathBuf>,

    /// Base path for relative inputs.
    pub base: Option<PathBuf>,
}

/// Load the directory configuration.
///
/// The file is validated before environment overrides are applied.
/// Values are merged with precedence:
/// 1. Environment variables (`<APP>_<KIND>_DIR`)
/// 2. The configuration file from `--config`
/// 3. Built-in defaults
pub fn load_configuration(global: &GlobalOptions) -> Result<DirsConfig, CliError> {
    let mut config = match &global.config {
        // the file must be valid on its own, even where the environment
        // replaces a value
        Some(path) => DirsConfig::load(path)
            .and_then(|config| config.validate().map(|()| config))
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?,
        None => DirsConfig::default(),
    };

    EnvironmentConfig::apply_overrides(&mut config, &global.app_name)?;
    Ok(config)
}

/// Build the directory registry for the configured application.
pub fn build_registry(global: &GlobalOptions) -> Result<AppDirs, CliError> {
    let config = load_configuration(global)?;
    let dirs = AppDirs::for_app_with_config(&global.app_name, &config, SystemDirs)?;
    log::debug!("resolved directories for {}", global.app_name);
    Ok(dirs)
}

/// Resolve the base path for transcoding.
///
/// An explicit `--base` is made absolute against the working directory.
/// Otherwise the workspace directory is used.
pub fn resolve_base(global: &GlobalOptions, dirs: &AppDirs) -> Result<PathBuf, CliError> {
    if let Some(base) = &global.base {
        return Ok(abs_path(env::current_dir()?, base));
    }

    match dirs.workspace() {
        Some(workspace) => Ok(workspace.to_path_buf()),
        None => Ok(env::current_dir()?),
    }
}
