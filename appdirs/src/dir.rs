//! Directory descriptors.
//!
//! A [`Dir`] records one managed directory: its kind, its absolute path and
//! the aliases (keywords) that stand in for that path.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::kind::{default_aliases, DirKind, Platform};
use crate::path::clean;
use crate::platform::{PlatformDirs, SystemDirs};

/// Optional settings for constructing a [`Dir`].
///
/// Unset fields fall back to defaults that depend on the directory kind.
///
/// # Examples
///
/// ```
/// use appdirs::DirOptions;
///
/// let options = DirOptions::new()
///     .path("/var/cache/myapp")
///     .aliases(["$CACHE"]);
/// assert!(options.path.is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirOptions {
    /// Absolute path of the directory. When unset (or empty) the platform
    /// default for the kind is used.
    pub path: Option<PathBuf>,

    /// Aliases of the directory. When empty the default aliases for the kind
    /// are used.
    pub aliases: Vec<String>,
}

impl DirOptions {
    /// Options that use every default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit path.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set explicit aliases.
    #[must_use]
    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }
}

/// A managed application directory and its aliases.
///
/// The path is always absolute and cleaned. Aliases are distinct and case
/// sensitive; they are only changed through [`Dir::append_aliases`] and
/// [`Dir::remove_aliases`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dir {
    kind: DirKind,
    path: PathBuf,
    aliases: Vec<String>,
}

impl Dir {
    /// Create a directory using the operating system's defaults.
    ///
    /// Without an explicit path the location depends on the kind:
    /// - Cache and Temp: the platform cache or temp directory joined with
    ///   `app_name`
    /// - Config and Workspace: the workspace root (see [`root`](crate::root))
    /// - Home: the user home directory
    ///
    /// # Errors
    ///
    /// Returns [`Error::RelativePath`] if an explicit path is not absolute,
    /// or [`Error::DirectoryInit`] if the platform lookup fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use appdirs::{Dir, DirKind, DirOptions, Error};
    ///
    /// let dir = Dir::new(DirKind::Cache, "myapp", DirOptions::new().path("/var/cache/./myapp/")).unwrap();
    /// assert_eq!(dir.path().to_str(), Some("/var/cache/myapp"));
    /// assert_eq!(dir.aliases(), ["$CACHE", "${CACHE}"]);
    ///
    /// let err = Dir::new(DirKind::Cache, "myapp", DirOptions::new().path("test")).unwrap_err();
    /// assert!(matches!(err, Error::RelativePath { .. }));
    /// ```
    pub fn new(kind: DirKind, app_name: &str, options: DirOptions) -> Result<Self> {
        Self::with_platform(kind, app_name, options, &SystemDirs)
    }

    /// Create a directory, asking `platform` for default locations.
    ///
    /// # Errors
    ///
    /// See [`Dir::new`].
    pub fn with_platform(
        kind: DirKind,
        app_name: &str,
        options: DirOptions,
        platform: &dyn PlatformDirs,
    ) -> Result<Self> {
        let path = match options.path.filter(|p| !p.as_os_str().is_empty()) {
            Some(path) if !path.is_absolute() => return Err(Error::RelativePath { path }),
            Some(path) => path,
            None => default_path(kind, app_name, platform).map_err(|source| {
                Error::DirectoryInit {
                    kind,
                    source: Box::new(source),
                }
            })?,
        };

        let aliases = if options.aliases.is_empty() {
            default_aliases(kind, Platform::current())
        } else {
            dedup(options.aliases)
        };

        Ok(Self {
            kind,
            path: clean(&path),
            aliases,
        })
    }

    /// The kind of directory.
    #[must_use]
    pub fn kind(&self) -> DirKind {
        self.kind
    }

    /// The absolute, cleaned path of the directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The aliases of the directory, in their current order.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Check whether `alias` is one of the directory's aliases.
    #[must_use]
    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases.iter().any(|a| a == alias)
    }

    /// Append aliases that are not present yet, then sort all aliases.
    ///
    /// # Examples
    ///
    /// ```
    /// use appdirs::{Dir, DirKind, DirOptions};
    ///
    /// let mut dir = Dir::new(
    ///     DirKind::Cache,
    ///     "myapp",
    ///     DirOptions::new().path("/cache").aliases(["c", "a"]),
    /// ).unwrap();
    /// dir.append_aliases(["b", "a"]);
    /// assert_eq!(dir.aliases(), ["a", "b", "c"]);
    /// ```
    pub fn append_aliases<I, S>(&mut self, aliases: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for alias in aliases {
            let alias = alias.into();
            if !self.has_alias(&alias) {
                self.aliases.push(alias);
            }
        }

        self.aliases.sort();
    }

    /// Remove the first occurrence of each alias. Unknown aliases are
    /// ignored and the order of the remaining aliases is kept.
    pub fn remove_aliases<I, S>(&mut self, aliases: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for alias in aliases {
            if let Some(pos) = self.aliases.iter().position(|a| a == alias.as_ref()) {
                self.aliases.remove(pos);
            }
        }
    }

    /// Replace empty aliases with the defaults for the kind.
    pub(crate) fn fill_default_aliases(&mut self, platform: Platform) {
        if self.aliases.is_empty() {
            self.aliases = default_aliases(self.kind, platform);
        }
    }
}

/// Look up the platform default location for a kind.
fn default_path(kind: DirKind, app_name: &str, platform: &dyn PlatformDirs) -> Result<PathBuf> {
    match kind {
        DirKind::Cache => platform
            .cache_dir()
            .map(|dir| dir.join(app_name))
            .ok_or(Error::PlatformLookup { directory: "cache" }),
        DirKind::Config | DirKind::Workspace => platform.workspace_root(app_name),
        DirKind::Home => platform
            .home_dir()
            .ok_or(Error::PlatformLookup { directory: "home" }),
        DirKind::Temp => Ok(platform.temp_dir().join(app_name)),
    }
}

fn dedup(aliases: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(aliases.len());
    for alias in aliases {
        if !unique.contains(&alias) {
            unique.push(alias);
        }
    }
    unique
}
