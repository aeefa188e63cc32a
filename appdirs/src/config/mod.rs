//! Directory configuration.
//!
//! Configuration is merged from the following sources (highest to lowest
//! precedence):
//!
//! 1. Environment variables (`<APP>_<KIND>_DIR`)
//! 2. A YAML configuration file
//! 3. Built-in platform defaults
//!
//! # Examples
//!
//! ```no_run
//! use appdirs::config::{DirsConfig, EnvironmentConfig};
//! use appdirs::{AppDirs, SystemDirs};
//! use std::path::Path;
//!
//! let mut config = DirsConfig::load(Path::new("appdirs.yaml")).unwrap();
//! EnvironmentConfig::apply_overrides(&mut config, "myapp").unwrap();
//!
//! let dirs = AppDirs::for_app_with_config("myapp", &config, SystemDirs).unwrap();
//! println!("cache: {:?}", dirs.cache());
//! ```

pub mod environment;
pub mod schema;

pub use environment::EnvironmentConfig;
pub use schema::{DirConfig, DirsConfig};
