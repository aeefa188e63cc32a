//! Common test utilities for appdirs integration tests.

use std::env;
use std::path::{Path, PathBuf};

/// The base name of the running test executable.
///
/// Using it as the application name makes workspace discovery treat the test
/// as an installed binary, so the workspace resolves to the working directory.
#[allow(dead_code)]
pub fn current_exe_name() -> String {
    env::args_os()
        .next()
        .map(PathBuf::from)
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .expect("test executable has a name")
}

/// Whether `dir` or one of its ancestors is a repository checkout.
#[allow(dead_code)]
pub fn inside_repository(dir: &Path) -> bool {
    dir.ancestors().any(|d| d.join(".git").is_dir())
}

/// RAII guard restoring the working directory.
///
/// Tests changing the working directory must be marked `#[serial]`.
#[allow(dead_code)]
pub struct CwdGuard {
    previous: PathBuf,
}

#[allow(dead_code)]
impl CwdGuard {
    pub fn enter(dir: &Path) -> Self {
        let previous = env::current_dir().expect("cwd is readable");
        env::set_current_dir(dir).expect("can enter directory");
        Self { previous }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.previous);
    }
}

/// RAII guard for setting and restoring environment variables.
///
/// Tests using environment variables must be marked `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    pub fn set(key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}
