//! The application directory registry.
//!
//! [`AppDirs`] owns at most one [`Dir`] per [`DirKind`] and derives two
//! keyword maps from their aliases:
//! - the forward map (alias to path) used to expand keywords
//! - the reverse map (path to its first alias) used to parameterize paths
//!
//! Replacing an already registered kind rebuilds both maps from scratch in
//! the fixed order Cache, Config, Home, Temp, Workspace. Registering a kind
//! for the first time only extends the maps, so the initial registration
//! order decides which alias wins a shared path in the reverse map.
//!
//! The registry has no internal locking. Callers sharing one instance
//! across threads must synchronize mutation themselves.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::DirsConfig;
use crate::dir::Dir;
use crate::error::Result;
use crate::kind::{DirKind, Platform};
use crate::platform::{PlatformDirs, SystemDirs};

/// Application directories with keyword substitution.
///
/// # Examples
///
/// ```
/// use appdirs::{AppDirs, Dir, DirKind, DirOptions};
/// use std::path::Path;
///
/// let mut dirs = AppDirs::new();
/// dirs.assign(Dir::new(DirKind::Cache, "myapp", DirOptions::new().path("/var/cache/myapp")).unwrap());
///
/// assert_eq!(dirs.cache(), Some(Path::new("/var/cache/myapp")));
/// assert_eq!(dirs.home(), None);
/// assert_eq!(
///     dirs.make_absolute("/work", "$CACHE/logs"),
///     Path::new("/var/cache/myapp/logs")
/// );
/// ```
pub struct AppDirs {
    dirs: BTreeMap<DirKind, Dir>,
    keywords: HashMap<String, PathBuf>,
    reverse_keywords: HashMap<PathBuf, String>,
    platform: Platform,
    platform_dirs: Box<dyn PlatformDirs>,
}

impl fmt::Debug for AppDirs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppDirs")
            .field("dirs", &self.dirs)
            .field("keywords", &self.keywords)
            .field("reverse_keywords", &self.reverse_keywords)
            .field("platform", &self.platform)
            .finish_non_exhaustive()
    }
}

impl Default for AppDirs {
    fn default() -> Self {
        Self::new()
    }
}

impl AppDirs {
    /// Create an empty registry backed by the operating system's
    /// directories.
    #[must_use]
    pub fn new() -> Self {
        Self::with_platform(SystemDirs)
    }

    /// Create an empty registry backed by custom platform directories.
    #[must_use]
    pub fn with_platform(platform_dirs: impl PlatformDirs + 'static) -> Self {
        Self {
            dirs: BTreeMap::new(),
            keywords: HashMap::new(),
            reverse_keywords: HashMap::new(),
            platform: Platform::current(),
            platform_dirs: Box::new(platform_dirs),
        }
    }

    /// Create a registry with all five directories at their default
    /// locations, using the default aliases.
    ///
    /// The aliases follow POSIX expansion style with `$` as sigil and
    /// optional braces: `$CACHE`, `$HOME`, `$TEMP`, `$TMP`, `$TMPDIR`,
    /// `$TEMPDIR`, `$workspaceRoot` and `$PWD`. On Unix-like platforms `~`
    /// is an alias of the home directory as well.
    ///
    /// # Errors
    ///
    /// Returns an error if any directory cannot be initialized.
    pub fn for_app(app_name: &str) -> Result<Self> {
        Self::for_app_with_config(app_name, &DirsConfig::default(), SystemDirs)
    }

    /// Create a registry with all five directories, taking explicit paths
    /// and aliases from `config` and everything else from `platform_dirs`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or any directory
    /// cannot be initialized.
    pub fn for_app_with_config(
        app_name: &str,
        config: &DirsConfig,
        platform_dirs: impl PlatformDirs + 'static,
    ) -> Result<Self> {
        config.validate()?;

        let mut registry = Self::with_platform(platform_dirs);
        for kind in DirKind::REBUILD_ORDER {
            let dir = Dir::with_platform(
                kind,
                app_name,
                config.options(kind),
                registry.platform_dirs.as_ref(),
            )?;
            registry.dirs.insert(kind, dir);
        }
        registry.rebuild_keywords();

        Ok(registry)
    }

    /// Install or replace the directory for its kind.
    ///
    /// A directory without aliases receives the default aliases of its
    /// kind. Duplicate aliases across directories are not checked; the
    /// last one written wins the forward map.
    pub fn assign(&mut self, mut dir: Dir) {
        dir.fill_default_aliases(self.platform);
        let kind = dir.kind();

        if self.dirs.insert(kind, dir).is_some() {
            log::debug!("replaced {kind} directory, rebuilding keyword maps");
            self.rebuild_keywords();
        } else if let Some(dir) = self.dirs.get(&kind) {
            log::debug!("registered {kind} directory at {}", dir.path().display());
            Self::add_keywords(&mut self.keywords, &mut self.reverse_keywords, dir);
        }
    }

    /// The directory registered for `kind`, if any.
    #[must_use]
    pub fn dir(&self, kind: DirKind) -> Option<&Dir> {
        self.dirs.get(&kind)
    }

    /// All registered directories in kind order.
    pub fn dirs(&self) -> impl Iterator<Item = &Dir> {
        self.dirs.values()
    }

    /// The cache directory, if set.
    #[must_use]
    pub fn cache(&self) -> Option<&Path> {
        self.path_of(DirKind::Cache)
    }

    /// The config directory, if set.
    #[must_use]
    pub fn config(&self) -> Option<&Path> {
        self.path_of(DirKind::Config)
    }

    /// The home directory, if set.
    #[must_use]
    pub fn home(&self) -> Option<&Path> {
        self.path_of(DirKind::Home)
    }

    /// The temp directory, if set.
    #[must_use]
    pub fn temp(&self) -> Option<&Path> {
        self.path_of(DirKind::Temp)
    }

    /// The workspace directory, if set.
    #[must_use]
    pub fn workspace(&self) -> Option<&Path> {
        self.path_of(DirKind::Workspace)
    }

    /// The forward keyword map (alias to path).
    #[must_use]
    pub fn keywords(&self) -> &HashMap<String, PathBuf> {
        &self.keywords
    }

    /// The reverse keyword map (path to its first alias).
    #[must_use]
    pub fn reverse_keywords(&self) -> &HashMap<PathBuf, String> {
        &self.reverse_keywords
    }

    pub(crate) fn platform_dirs(&self) -> &dyn PlatformDirs {
        self.platform_dirs.as_ref()
    }

    fn path_of(&self, kind: DirKind) -> Option<&Path> {
        self.dirs.get(&kind).map(Dir::path)
    }

    fn rebuild_keywords(&mut self) {
        self.keywords.clear();
        self.reverse_keywords.clear();

        for kind in DirKind::REBUILD_ORDER {
            if let Some(dir) = self.dirs.get(&kind) {
                Self::add_keywords(&mut self.keywords, &mut self.reverse_keywords, dir);
            }
        }
    }

    fn add_keywords(
        keywords: &mut HashMap<String, PathBuf>,
        reverse_keywords: &mut HashMap<PathBuf, String>,
        dir: &Dir,
    ) {
        for (i, alias) in dir.aliases().iter().enumerate() {
            keywords.insert(alias.clone(), dir.path().to_path_buf());
            if i == 0 {
                reverse_keywords.insert(dir.path().to_path_buf(), alias.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dir::DirOptions;
    use crate::platform::mocks::MockDirs;

    fn dir(kind: DirKind, path: &str, aliases: &[&str]) -> Dir {
        Dir::new(
            kind,
            "Test",
            DirOptions::new().path(path).aliases(aliases.iter().copied()),
        )
        .unwrap()
    }

    fn mock_platform() -> MockDirs {
        let mut platform = MockDirs::new();
        platform
            .expect_cache_dir()
            .returning(|| Some(PathBuf::from("/home/user/.cache")));
        platform
            .expect_home_dir()
            .returning(|| Some(PathBuf::from("/home/user")));
        platform
            .expect_temp_dir()
            .returning(|| PathBuf::from("/tmp"));
        platform
            .expect_workspace_root()
            .returning(|_| Ok(PathBuf::from("/home/user/src/repo")));
        platform
    }

    #[test]
    fn test_empty_registry() {
        let dirs = AppDirs::new();
        assert_eq!(dirs.cache(), None);
        assert_eq!(dirs.config(), None);
        assert_eq!(dirs.home(), None);
        assert_eq!(dirs.temp(), None);
        assert_eq!(dirs.workspace(), None);
        assert!(dirs.keywords().is_empty());
        assert!(dirs.reverse_keywords().is_empty());
    }

    #[test]
    #[cfg(unix)]
    fn test_for_app_with_config_defaults() {
        let dirs =
            AppDirs::for_app_with_config("Test", &DirsConfig::default(), mock_platform()).unwrap();

        assert_eq!(dirs.cache(), Some(Path::new("/home/user/.cache/Test")));
        assert_eq!(dirs.config(), Some(Path::new("/home/user/src/repo")));
        assert_eq!(dirs.home(), Some(Path::new("/home/user")));
        assert_eq!(dirs.temp(), Some(Path::new("/tmp/Test")));
        assert_eq!(dirs.workspace(), Some(Path::new("/home/user/src/repo")));

        assert_eq!(dirs.keywords()["$CACHE"], Path::new("/home/user/.cache/Test"));
        assert_eq!(dirs.keywords()["~"], Path::new("/home/user"));
        assert_eq!(dirs.keywords()["${TMPDIR}"], Path::new("/tmp/Test"));
        assert_eq!(
            dirs.reverse_keywords()[Path::new("/home/user/src/repo")],
            "$workspaceRoot"
        );
        assert_eq!(dirs.dirs().count(), 5);
    }

    #[test]
    fn test_assign_injects_default_aliases() {
        let mut dirs = AppDirs::new();
        let mut cache = dir(DirKind::Cache, "/c", &["$X"]);
        cache.remove_aliases(["$X"]);
        dirs.assign(cache);

        let aliases = dirs.dir(DirKind::Cache).unwrap().aliases();
        assert_eq!(aliases, ["$CACHE", "${CACHE}"]);
        assert_eq!(dirs.keywords()["${CACHE}"], Path::new("/c"));
    }

    #[test]
    fn test_assign_new_kind_extends_maps() {
        let mut dirs = AppDirs::new();
        dirs.assign(dir(DirKind::Workspace, "/shared", &["$W"]));
        dirs.assign(dir(DirKind::Cache, "/shared", &["$C"]));

        // first registration of a new kind overwrites the reverse entry
        assert_eq!(dirs.reverse_keywords()[Path::new("/shared")], "$C");
        assert_eq!(dirs.keywords()["$W"], Path::new("/shared"));
        assert_eq!(dirs.keywords()["$C"], Path::new("/shared"));
    }

    #[test]
    fn test_replacing_kind_rebuilds_in_fixed_order() {
        let mut dirs = AppDirs::new();
        dirs.assign(dir(DirKind::Workspace, "/shared", &["$W"]));
        dirs.assign(dir(DirKind::Cache, "/shared", &["$C"]));

        // rebuild visits Cache before Workspace, so Workspace wins
        dirs.assign(dir(DirKind::Workspace, "/shared", &["$W2"]));
        assert_eq!(dirs.reverse_keywords()[Path::new("/shared")], "$W2");
        assert!(!dirs.keywords().contains_key("$W"));
        assert_eq!(dirs.keywords()["$C"], Path::new("/shared"));
    }

    #[test]
    fn test_replacing_kind_drops_stale_keywords() {
        let mut dirs = AppDirs::new();
        dirs.assign(dir(DirKind::Temp, "/tmp/a", &["$T", "$T2"]));
        dirs.assign(dir(DirKind::Temp, "/tmp/b", &["$T"]));

        assert_eq!(dirs.temp(), Some(Path::new("/tmp/b")));
        assert_eq!(dirs.keywords().len(), 1);
        assert_eq!(dirs.keywords()["$T"], Path::new("/tmp/b"));
        assert!(!dirs.reverse_keywords().contains_key(Path::new("/tmp/a")));
    }

    #[test]
    fn test_forward_map_last_writer_wins() {
        let mut dirs = AppDirs::new();
        dirs.assign(dir(DirKind::Cache, "/c", &["$X"]));
        dirs.assign(dir(DirKind::Home, "/h", &["$X"]));

        assert_eq!(dirs.keywords()["$X"], Path::new("/h"));
        assert_eq!(dirs.reverse_keywords()[Path::new("/c")], "$X");
        assert_eq!(dirs.reverse_keywords()[Path::new("/h")], "$X");
    }

    #[test]
    fn test_config_without_aliases_adds_no_keywords() {
        let mut dirs = AppDirs::new();
        let mut config = dir(DirKind::Config, "/etc/app", &["$TMP_CFG"]);
        config.remove_aliases(["$TMP_CFG"]);
        dirs.assign(config);

        assert_eq!(dirs.config(), Some(Path::new("/etc/app")));
        assert!(dirs.keywords().is_empty());
        assert!(dirs.reverse_keywords().is_empty());
    }

    #[test]
    fn test_debug_omits_platform_dirs() {
        let dirs = AppDirs::with_platform(mock_platform());
        let debug = format!("{dirs:?}");
        assert!(debug.contains("AppDirs"));
        assert!(debug.contains(".."));
    }
}
