//! Environment variable handling for configuration overrides.
//!
//! Each kind can be relocated through `<APP>_<KIND>_DIR`, where `<APP>` is
//! the application name upper-cased with every other character mapped to
//! `_`. For an application named `my-app` the cache override is
//! `MY_APP_CACHE_DIR`.

use std::env;
use std::path::PathBuf;

use crate::config::schema::DirsConfig;
use crate::error::{Error, Result};
use crate::kind::DirKind;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use appdirs::config::{DirsConfig, EnvironmentConfig};
///
/// let mut config = DirsConfig::default();
/// EnvironmentConfig::apply_overrides(&mut config, "myapp").unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// The override variable for `kind`.
    ///
    /// # Examples
    ///
    /// ```
    /// use appdirs::config::EnvironmentConfig;
    /// use appdirs::DirKind;
    ///
    /// assert_eq!(EnvironmentConfig::var_name("my-app", DirKind::Temp), "MY_APP_TEMP_DIR");
    /// ```
    #[must_use]
    pub fn var_name(app_name: &str, kind: DirKind) -> String {
        let prefix: String = app_name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect();
        format!("{prefix}_{}_DIR", kind.as_str().to_ascii_uppercase())
    }

    /// Apply environment overrides to `config`.
    ///
    /// Empty variables are ignored. Overrides replace the configured path
    /// but keep configured aliases.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if an override is not an absolute
    /// path.
    pub fn apply_overrides(config: &mut DirsConfig, app_name: &str) -> Result<()> {
        for kind in DirKind::ALL {
            let name = Self::var_name(app_name, kind);
            let Some(value) = env::var_os(&name).filter(|v| !v.is_empty()) else {
                continue;
            };

            let path = PathBuf::from(value);
            if !path.is_absolute() {
                return Err(Error::InvalidConfig {
                    field: name,
                    message: format!("must be an absolute path, got '{}'", path.display()),
                });
            }

            log::debug!("{name} overrides the {kind} directory");
            config.entry(kind).path = Some(path);
        }

        Ok(())
    }
}
