#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # appdirs
//!
//! Well-known application directories with portable keyword substitution.
//!
//! This library resolves the cache, config, home, workspace and temp
//! directories of an application and lets callers write paths such as
//! `$CACHE/logs` that expand to real locations, or convert real paths back
//! into their portable, parameterized form.
//!
//! ## Core Types
//!
//! - [`AppDirs`]: the directory registry and keyword engine
//! - [`Dir`], [`DirKind`] and [`DirOptions`]: one managed directory
//! - [`RootResolver`] and [`root`]: workspace root discovery
//! - [`PlatformDirs`] and [`SystemDirs`]: platform default lookups
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use appdirs::{AppDirs, Dir, DirKind, DirOptions};
//! use std::path::Path;
//!
//! let mut dirs = AppDirs::new();
//! dirs.assign(Dir::new(DirKind::Cache, "myapp", DirOptions::new().path("/var/cache/myapp")).unwrap());
//!
//! let expanded = dirs.make_absolute("/work", "$CACHE/logs");
//! assert_eq!(expanded, Path::new("/var/cache/myapp/logs"));
//!
//! let portable = dirs.parameterize("/work", &expanded);
//! assert_eq!(portable, Path::new("$CACHE/logs"));
//! ```

pub mod config;
pub mod dir;
pub mod error;
pub mod kind;
pub mod logging;
pub mod path;
pub mod platform;
pub mod registry;
pub mod root;
mod temp;
mod transcode;

// Re-export key types at crate root for convenience
pub use config::{DirsConfig, EnvironmentConfig};
pub use dir::{Dir, DirOptions};
pub use error::{Error, Result};
pub use kind::{default_aliases, DirKind, Platform};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::abs_path;
pub use platform::{PlatformDirs, SystemDirs};
pub use registry::AppDirs;
pub use root::{root, RootResolver, REPOSITORY_MARKER};
