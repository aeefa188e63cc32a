//! Platform directory lookups.
//!
//! The [`PlatformDirs`] trait is the seam between the registry and the
//! operating system. [`SystemDirs`] answers with the real platform defaults;
//! tests substitute their own implementation.

use std::path::PathBuf;

use crate::error::Result;
use crate::root;

/// Supplies the platform default directories.
pub trait PlatformDirs {
    /// The user-specific cache directory, if the platform defines one.
    fn cache_dir(&self) -> Option<PathBuf>;

    /// The user home directory, if it can be determined.
    fn home_dir(&self) -> Option<PathBuf>;

    /// The default temp directory.
    fn temp_dir(&self) -> PathBuf;

    /// The workspace root for `app_name`.
    ///
    /// # Errors
    ///
    /// Returns an error if no workspace root can be identified.
    fn workspace_root(&self, app_name: &str) -> Result<PathBuf> {
        root::root(app_name)
    }
}

/// The operating system's directories.
///
/// - Cache: `$XDG_CACHE_HOME` or `~/.cache` on Linux, `~/Library/Caches` on
///   macOS, `{FOLDERID_LocalAppData}` on Windows.
/// - Home: `$HOME`, falling back to the user database on Unix.
/// - Temp: `$TMPDIR` or `/tmp` on Unix, `%TMP%`/`%TEMP%` on Windows.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDirs;

impl PlatformDirs for SystemDirs {
    fn cache_dir(&self) -> Option<PathBuf> {
        dirs::cache_dir()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        home::home_dir()
    }

    fn temp_dir(&self) -> PathBuf {
        std::env::temp_dir()
    }
}
