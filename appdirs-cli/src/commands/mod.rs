//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `show`: List the registered directories and their aliases
//! - `expand`: Expand keywords and make a path absolute
//! - `relativize`: Expand keywords and make a path relative to the base
//! - `parameterize`: Replace directory prefixes with keywords
//! - `root`: Print the workspace root
//! - `temp`: Create, recreate or remove the application temp directory

pub mod expand;
pub mod parameterize;
pub mod relativize;
pub mod root;
pub mod show;
pub mod temp;

pub use expand::ExpandCommand;
pub use parameterize::ParameterizeCommand;
pub use relativize::RelativizeCommand;
pub use root::RootCommand;
pub use show::ShowCommand;
pub use temp::TempCommand;
