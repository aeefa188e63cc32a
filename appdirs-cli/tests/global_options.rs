//! Tests for global options: app name, config file, environment overrides
//! and workspace discovery.

mod common;

use common::{line, TestEnv};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_root_is_working_directory() {
    let env = TestEnv::new();

    env.command()
        .arg("root")
        .assert()
        .success()
        .stdout(line(env.path()));
}

#[test]
fn test_root_searches_for_repository() {
    let env = TestEnv::new();
    let repo = env.path().join("repo");
    let nested = repo.join("pkg").join("sub");
    fs::create_dir_all(repo.join(".git")).unwrap();
    fs::create_dir_all(&nested).unwrap();

    env.command()
        .current_dir(&nested)
        .args(["--app-name", "some-other-tool", "root"])
        .assert()
        .success()
        .stdout(line(&repo));
}

#[test]
fn test_root_not_found() {
    let env = TestEnv::new();
    if env.inside_repository() {
        return;
    }

    env.command()
        .args(["--app-name", "some-other-tool", "root"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains(".git"));
}

#[test]
fn test_app_name_from_environment() {
    let env = TestEnv::new();

    env.command_bare()
        .env("APPDIRS_APP_NAME", "renamed")
        .env("RENAMED_CACHE_DIR", env.cache())
        .env("RENAMED_WORKSPACE_DIR", env.path())
        .env("RENAMED_CONFIG_DIR", env.path())
        .args(["show", "cache"])
        .assert()
        .success()
        .stdout(line(env.cache()));
}

#[test]
#[cfg(unix)]
fn test_config_file() {
    let env = TestEnv::new();
    let config = env.write_file(
        "dirs.yaml",
        "cache:\n  path: /var/cache/appdirs-test\n  aliases: [$STORE]\n",
    );

    env.command_bare()
        .arg("--config")
        .arg(&config)
        .args(["expand", "$STORE/blobs"])
        .assert()
        .success()
        .stdout("/var/cache/appdirs-test/blobs\n");
}

#[test]
#[cfg(unix)]
fn test_environment_override_beats_config_file() {
    let env = TestEnv::new();
    let config = env.write_file("dirs.yaml", "cache:\n  path: /var/cache/appdirs-test\n");

    // the command helper sets APPDIRS_CACHE_DIR
    env.command()
        .env("APPDIRS_CONFIG", &config)
        .args(["show", "cache"])
        .assert()
        .success()
        .stdout(line(env.cache()));
}

#[test]
fn test_invalid_config_file() {
    let env = TestEnv::new();
    let config = env.write_file("dirs.yaml", "temp:\n  path: relative/tmp\n");

    env.command()
        .arg("--config")
        .arg(&config)
        .arg("show")
        .assert()
        .code(7)
        .stderr(predicate::str::starts_with("Error: Configuration error"))
        .stderr(predicate::str::contains("temp.path"));
}

#[test]
fn test_invalid_config_file_rejected_despite_override() {
    let env = TestEnv::new();
    let config = env.write_file("dirs.yaml", "cache:\n  path: relative/cache\n");

    // the command helper sets APPDIRS_CACHE_DIR, which would replace the
    // relative path; the file is still checked on its own
    env.command()
        .arg("--config")
        .arg(&config)
        .arg("show")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("cache.path"));
}

#[test]
fn test_malformed_config_file() {
    let env = TestEnv::new();
    let config = env.write_file("dirs.yaml", "scratch: {}\n");

    env.command()
        .arg("--config")
        .arg(&config)
        .arg("show")
        .assert()
        .code(7);
}

#[test]
fn test_missing_config_file() {
    let env = TestEnv::new();

    env.command()
        .arg("--config")
        .arg(env.path().join("absent.yaml"))
        .arg("show")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("absent.yaml"));
}

#[test]
fn test_relative_environment_override() {
    let env = TestEnv::new();

    env.command()
        .env("APPDIRS_CACHE_DIR", "relative/cache")
        .arg("show")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("APPDIRS_CACHE_DIR"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let env = TestEnv::new();

    env.command()
        .args(["--verbose", "show", "cache"])
        .assert()
        .success()
        .stdout(line(env.cache()))
        .stderr(predicate::str::contains("DEBUG:"));
}

#[test]
fn test_quiet_suppresses_logging() {
    let env = TestEnv::new();

    env.command()
        .args(["--quiet", "show", "cache"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
