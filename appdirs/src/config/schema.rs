//! Configuration schema definitions.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dir::DirOptions;
use crate::error::{Error, Result};
use crate::kind::DirKind;

/// Settings for one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DirConfig {
    /// Absolute path overriding the platform default.
    pub path: Option<PathBuf>,

    /// Aliases replacing the defaults of the kind.
    pub aliases: Option<Vec<String>>,
}

/// Directory configuration, one optional entry per kind.
///
/// # Examples
///
/// ```
/// use appdirs::config::DirsConfig;
/// use appdirs::DirKind;
///
/// let config = DirsConfig::from_yaml(
///     r#"
/// cache:
///   path: /var/cache/myapp
/// temp:
///   aliases: ["$SCRATCH"]
/// "#,
/// )
/// .unwrap();
///
/// assert_eq!(config.options(DirKind::Temp).aliases, ["$SCRATCH"]);
/// assert!(config.options(DirKind::Home).path.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DirsConfig {
    /// Cache directory settings.
    pub cache: Option<DirConfig>,

    /// Config directory settings.
    pub config: Option<DirConfig>,

    /// Home directory settings.
    pub home: Option<DirConfig>,

    /// Workspace directory settings.
    pub workspace: Option<DirConfig>,

    /// Temp directory settings.
    pub temp: Option<DirConfig>,
}

impl DirsConfig {
    /// Parse a configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] for malformed YAML or unknown keys.
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load a configuration file.
    ///
    /// An empty file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        log::debug!("loaded directory configuration from {}", path.display());
        Self::from_yaml(&text)
    }

    /// The settings for `kind`, if any.
    #[must_use]
    pub fn get(&self, kind: DirKind) -> Option<&DirConfig> {
        match kind {
            DirKind::Cache => self.cache.as_ref(),
            DirKind::Config => self.config.as_ref(),
            DirKind::Home => self.home.as_ref(),
            DirKind::Workspace => self.workspace.as_ref(),
            DirKind::Temp => self.temp.as_ref(),
        }
    }

    /// The settings for `kind`, inserting empty settings if absent.
    pub fn entry(&mut self, kind: DirKind) -> &mut DirConfig {
        let slot = match kind {
            DirKind::Cache => &mut self.cache,
            DirKind::Config => &mut self.config,
            DirKind::Home => &mut self.home,
            DirKind::Workspace => &mut self.workspace,
            DirKind::Temp => &mut self.temp,
        };
        slot.get_or_insert_with(DirConfig::default)
    }

    /// Constructor options for `kind`.
    #[must_use]
    pub fn options(&self, kind: DirKind) -> DirOptions {
        let Some(entry) = self.get(kind) else {
            return DirOptions::new();
        };

        DirOptions {
            path: entry.path.clone(),
            aliases: entry.aliases.clone().unwrap_or_default(),
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if a path is relative or an alias is
    /// empty or contains a path separator.
    pub fn validate(&self) -> Result<()> {
        for kind in DirKind::ALL {
            let Some(entry) = self.get(kind) else {
                continue;
            };

            if let Some(path) = &entry.path {
                if !path.as_os_str().is_empty() && !path.is_absolute() {
                    return Err(Error::InvalidConfig {
                        field: format!("{kind}.path"),
                        message: format!("must be absolute, got '{}'", path.display()),
                    });
                }
            }

            for alias in entry.aliases.iter().flatten() {
                if alias.is_empty() {
                    return Err(Error::InvalidConfig {
                        field: format!("{kind}.aliases"),
                        message: "aliases cannot be empty".to_string(),
                    });
                }
                // aliases only ever match a single path segment
                if alias.contains(std::path::MAIN_SEPARATOR) {
                    return Err(Error::InvalidConfig {
                        field: format!("{kind}.aliases"),
                        message: format!("alias '{alias}' contains a path separator"),
                    });
                }
            }
        }

        Ok(())
    }
}
