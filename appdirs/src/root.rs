//! Workspace root discovery.
//!
//! When the running executable is named after the application, it is treated
//! as an installed binary and the working directory is the workspace root.
//! Otherwise the program is assumed to run from a source checkout (for
//! instance through `cargo run` from a subdirectory), and the root is the
//! nearest ancestor of the working directory that contains a repository
//! marker directory.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// The repository marker searched for by default.
pub const REPOSITORY_MARKER: &str = ".git";

/// Resolves the workspace root for an application.
///
/// # Examples
///
/// ```
/// use appdirs::RootResolver;
/// use std::path::Path;
///
/// // An installed binary named after the app trusts the working directory
/// let resolver = RootResolver::new();
/// let root = resolver
///     .resolve(Path::new("/usr/local/bin/myapp"), Path::new("/srv/data"), "myapp")
///     .unwrap();
/// assert_eq!(root, Path::new("/srv/data"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootResolver {
    marker: String,
}

impl Default for RootResolver {
    fn default() -> Self {
        Self {
            marker: REPOSITORY_MARKER.to_string(),
        }
    }
}

impl RootResolver {
    /// Create a resolver searching for `.git`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver searching for a custom marker directory.
    #[must_use]
    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// The marker directory name.
    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Resolve the workspace root given the process invocation path and the
    /// working directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RootNotFound`] if the upward search is needed and
    /// fails.
    pub fn resolve(&self, invocation: &Path, cwd: &Path, app_name: &str) -> Result<PathBuf> {
        if is_app_binary(invocation, app_name) {
            log::debug!(
                "running as installed binary '{app_name}', using {} as workspace root",
                cwd.display()
            );
            return Ok(cwd.to_path_buf());
        }

        self.find_upwards(cwd)
    }

    /// Find the nearest directory at or above `start` containing the marker
    /// directory.
    ///
    /// The search stops after checking the root of `start`'s volume.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RootNotFound`] if no ancestor contains the marker.
    pub fn find_upwards(&self, start: &Path) -> Result<PathBuf> {
        for dir in start.ancestors() {
            log::trace!("checking {} for {}", dir.display(), self.marker);
            if dir.join(&self.marker).is_dir() {
                log::debug!("workspace root found at {}", dir.display());
                return Ok(dir.to_path_buf());
            }
        }

        Err(Error::RootNotFound {
            marker: self.marker.clone(),
            start: start.to_path_buf(),
        })
    }
}

/// Check whether the invocation path names the application binary.
fn is_app_binary(invocation: &Path, app_name: &str) -> bool {
    if invocation.file_name() == Some(OsStr::new(app_name)) {
        return true;
    }

    cfg!(windows)
        && invocation
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("exe"))
        && invocation.file_stem() == Some(OsStr::new(app_name))
}

/// Return the workspace root of the repository or the running command.
///
/// Compares the base name of the running executable with `app_name`. When
/// they match, the current working directory is returned as is. Otherwise
/// the nearest ancestor of the working directory containing a `.git`
/// directory is returned.
///
/// # Errors
///
/// Returns an error if the working directory cannot be determined or no
/// repository is found.
pub fn root(app_name: &str) -> Result<PathBuf> {
    let cwd = env::current_dir()?;
    let invocation = env::args_os().next().map(PathBuf::from).unwrap_or_default();

    RootResolver::new().resolve(&invocation, &cwd, app_name)
}
