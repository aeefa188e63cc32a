//! Directory kinds and their default keyword aliases.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// The kind of application directory.
///
/// Discriminants start at 1 so that a zeroed value never names a kind.
///
/// # Examples
///
/// ```
/// use appdirs::DirKind;
///
/// assert_eq!(DirKind::Cache.to_string(), "cache");
/// assert_eq!(DirKind::try_from(5), Ok(DirKind::Temp));
/// assert!(DirKind::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum DirKind {
    /// The user-specific cache directory, joined with the application name.
    Cache = 1,
    /// The directory containing the application configuration.
    Config = 2,
    /// The user home directory.
    Home = 3,
    /// The workspace root of the repository or running command.
    Workspace = 4,
    /// The application temp directory, joined with the application name.
    ///
    /// The path is not guaranteed to exist; see
    /// [`AppDirs::create_temp`](crate::AppDirs::create_temp).
    Temp = 5,
}

impl DirKind {
    /// All kinds in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Cache,
        Self::Config,
        Self::Home,
        Self::Workspace,
        Self::Temp,
    ];

    /// The order in which a registry rebuilds its keyword maps.
    pub(crate) const REBUILD_ORDER: [Self; 5] = [
        Self::Cache,
        Self::Config,
        Self::Home,
        Self::Temp,
        Self::Workspace,
    ];

    /// Returns the lowercase name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cache => "cache",
            Self::Config => "config",
            Self::Home => "home",
            Self::Workspace => "workspace",
            Self::Temp => "temp",
        }
    }

    /// Returns the name for a raw discriminant, or an empty string when the
    /// value does not name a kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use appdirs::DirKind;
    ///
    /// assert_eq!(DirKind::name_of(3), "home");
    /// assert_eq!(DirKind::name_of(0), "");
    /// assert_eq!(DirKind::name_of(6), "");
    /// ```
    #[must_use]
    pub fn name_of(value: u8) -> &'static str {
        Self::try_from(value).map_or("", Self::as_str)
    }
}

impl fmt::Display for DirKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl TryFrom<u8> for DirKind {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Cache),
            2 => Ok(Self::Config),
            3 => Ok(Self::Home),
            4 => Ok(Self::Workspace),
            5 => Ok(Self::Temp),
            other => Err(other),
        }
    }
}

impl FromStr for DirKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("invalid directory kind: {s}"))
    }
}

/// The platform family, which decides the home directory aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Windows, where `~` is not a home alias.
    Windows,
    /// Unix-like platforms, where `~` expands to the home directory.
    Unix,
}

impl Platform {
    /// The platform this binary was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// Whether a leading `~` names the home directory.
    #[must_use]
    pub const fn expands_tilde(self) -> bool {
        matches!(self, Self::Unix)
    }
}

const CACHE_ALIASES: &[&str] = &["$CACHE", "${CACHE}"];
const HOME_ALIASES: &[&str] = &["$HOME", "${HOME}"];
const TEMP_ALIASES: &[&str] = &[
    "$TEMP", "${TEMP}", "$TMP", "${TMP}", "$TMPDIR", "${TMPDIR}", "$TEMPDIR", "${TEMPDIR}",
];
const WORKSPACE_ALIASES: &[&str] = &["$workspaceRoot", "${workspaceRoot}", "$PWD", "${PWD}"];

/// Returns the default aliases for a kind on the given platform.
///
/// Config has no default aliases.
///
/// # Examples
///
/// ```
/// use appdirs::{default_aliases, DirKind, Platform};
///
/// assert_eq!(default_aliases(DirKind::Cache, Platform::Unix), ["$CACHE", "${CACHE}"]);
/// assert!(default_aliases(DirKind::Home, Platform::Unix).contains(&"~".to_string()));
/// assert!(!default_aliases(DirKind::Home, Platform::Windows).contains(&"~".to_string()));
/// ```
#[must_use]
pub fn default_aliases(kind: DirKind, platform: Platform) -> Vec<String> {
    let base: &[&str] = match kind {
        DirKind::Cache => CACHE_ALIASES,
        DirKind::Config => &[],
        DirKind::Home => HOME_ALIASES,
        DirKind::Workspace => WORKSPACE_ALIASES,
        DirKind::Temp => TEMP_ALIASES,
    };

    let mut aliases: Vec<String> = base.iter().map(|a| (*a).to_string()).collect();
    if kind == DirKind::Home && platform.expands_tilde() {
        aliases.push("~".to_string());
    }
    aliases
}
