//! Error types for the appdirs library.
//!
//! This module provides the error hierarchy for directory resolution,
//! keyword substitution and temp directory management, using `thiserror`
//! for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

use crate::kind::DirKind;

/// Result type alias for operations that may fail with an appdirs error.
///
/// # Examples
///
/// ```
/// use appdirs::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(8080)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the appdirs library.
#[derive(Debug, Error)]
pub enum Error {
    /// An explicit directory path was not absolute.
    #[error("cannot process relative path: {}", path.display())]
    RelativePath {
        /// The offending path.
        path: PathBuf,
    },

    /// A directory could not be initialized from its platform default.
    #[error("cannot initialize directory: {kind}")]
    DirectoryInit {
        /// The kind of directory being initialized.
        kind: DirKind,
        /// The underlying failure.
        #[source]
        source: Box<Error>,
    },

    /// The platform did not report a default directory.
    #[error("cannot determine the {directory} directory")]
    PlatformLookup {
        /// The directory the platform was asked for.
        directory: &'static str,
    },

    /// The upward search did not find the repository marker.
    #[error("cannot identify workspace root (no {marker} repository found above {})", start.display())]
    RootNotFound {
        /// The marker directory name searched for.
        marker: String,
        /// The directory the search started from.
        start: PathBuf,
    },

    /// An operation required a directory that was never assigned.
    #[error("cannot {operation}, invalid state: no {kind} directory assigned")]
    InvalidState {
        /// The operation that was attempted.
        operation: &'static str,
        /// The kind of directory that is missing.
        kind: DirKind,
    },

    /// The temp path exists but is not a directory.
    #[error("cannot create temp directory, duplicate name: '{}'", path.display())]
    DuplicateName {
        /// The conflicting path.
        path: PathBuf,
    },

    /// The temp path lies outside the platform temp root.
    #[error("temp directory is considered unsafe: {}", path.display())]
    UnsafeTempPath {
        /// The rejected path.
        path: PathBuf,
    },

    /// The temp path equals the platform temp root.
    #[error("expected a subdirectory within the temp directory: {}", path.display())]
    TempRootRemoval {
        /// The rejected path.
        path: PathBuf,
    },

    /// A directory could not be created.
    #[error("cannot create directory: {}", path.display())]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration value was rejected.
    #[error("invalid configuration for '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of the problem.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error rejected a destructive temp operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use appdirs::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::UnsafeTempPath { path: PathBuf::from("/etc") };
    /// assert!(err.is_unsafe());
    /// ```
    #[must_use]
    pub fn is_unsafe(&self) -> bool {
        matches!(
            self,
            Self::UnsafeTempPath { .. } | Self::TempRootRemoval { .. }
        )
    }

    /// Check if the error indicates a directory could not be located.
    ///
    /// Looks through `DirectoryInit` wrappers.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::RootNotFound { .. } | Self::PlatformLookup { .. } => true,
            Self::DirectoryInit { source, .. } => source.is_not_found(),
            Self::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_relative_path_error() {
        let err = Error::RelativePath {
            path: PathBuf::from("test"),
        };
        assert_eq!(format!("{err}"), "cannot process relative path: test");
    }

    #[test]
    fn test_directory_init_keeps_cause() {
        let err = Error::DirectoryInit {
            kind: DirKind::Cache,
            source: Box::new(Error::PlatformLookup { directory: "cache" }),
        };
        assert_eq!(format!("{err}"), "cannot initialize directory: cache");

        let source = err.source().unwrap();
        assert!(source.to_string().contains("cache directory"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_root_not_found_error() {
        let err = Error::RootNotFound {
            marker: ".git".to_string(),
            start: PathBuf::from("/work/src"),
        };
        let display = format!("{err}");
        assert!(display.contains("cannot identify workspace root"));
        assert!(display.contains(".git"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_state_error() {
        let err = Error::InvalidState {
            operation: "create temp directory",
            kind: DirKind::Temp,
        };
        let display = format!("{err}");
        assert!(display.contains("invalid state"));
        assert!(display.contains("temp"));
    }

    #[test]
    fn test_unsafe_errors() {
        let outside = Error::UnsafeTempPath {
            path: PathBuf::from("/etc"),
        };
        assert!(outside.to_string().contains("considered unsafe"));
        assert!(outside.is_unsafe());

        let root = Error::TempRootRemoval {
            path: PathBuf::from("/tmp"),
        };
        assert!(root.to_string().contains("expected a subdirectory"));
        assert!(root.is_unsafe());
        assert!(!root.is_not_found());
    }

    #[test]
    fn test_create_dir_error_source() {
        let err = Error::CreateDir {
            path: PathBuf::from("/tmp/app"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("cannot create directory"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
        assert!(err.is_not_found());
    }
}
