//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with isolated directories
//! - Command builder helpers with a controlled environment

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the caller's settings into tests.
const SCRUBBED_VARS: &[&str] = &[
    "APPDIRS_APP_NAME",
    "APPDIRS_CONFIG",
    "APPDIRS_LOG_MODE",
    "APPDIRS_CACHE_DIR",
    "APPDIRS_CONFIG_DIR",
    "APPDIRS_HOME_DIR",
    "APPDIRS_WORKSPACE_DIR",
    "APPDIRS_TEMP_DIR",
];

/// Test environment with isolated directories.
///
/// The binary runs with the temporary directory as its working directory.
/// Since it is invoked under its own application name, that directory is
/// the workspace root. Cache and home are redirected through environment
/// overrides and the platform temp root through `TMPDIR`.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path of the temporary directory
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");

        for name in ["cache", "home", "tmp"] {
            std::fs::create_dir_all(root.join(name)).expect("Failed to create test directory");
        }

        Self { temp_dir, root }
    }

    /// Get a bare command builder running in the test directory.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("appdirs").expect("Failed to find appdirs binary");
        cmd.current_dir(&self.root);
        for name in SCRUBBED_VARS {
            cmd.env_remove(name);
        }
        cmd
    }

    /// Get a command builder with cache, home and temp redirected into
    /// the test directory.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.env("APPDIRS_CACHE_DIR", self.cache())
            .env("APPDIRS_HOME_DIR", self.home())
            .env("TMPDIR", self.tmp());
        cmd
    }

    /// The workspace root seen by the binary.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// The redirected cache directory.
    pub fn cache(&self) -> PathBuf {
        self.root.join("cache")
    }

    /// The redirected home directory.
    pub fn home(&self) -> PathBuf {
        self.root.join("home")
    }

    /// The redirected platform temp root.
    pub fn tmp(&self) -> PathBuf {
        self.root.join("tmp")
    }

    /// Write a file relative to the test directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Whether the test directory sits inside a repository checkout.
    pub fn inside_repository(&self) -> bool {
        self.root.ancestors().any(|d| d.join(".git").is_dir())
    }
}

/// Expected stdout for a single printed path.
#[allow(dead_code)]
pub fn line(path: impl AsRef<Path>) -> String {
    format!("{}\n", path.as_ref().display())
}
