//! CLI smoke tests for signpath

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn signpath(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("signpath"));
    cmd.env("HOME", home.path()).current_dir(home.path());
    cmd
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    signpath(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("signpath"));
}

#[test]
fn test_version_json() {
    let temp = TempDir::new().unwrap();
    signpath(&temp)
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();
    signpath(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("spelled out letter by letter"));
}

#[test]
fn test_no_args_shows_info() {
    let temp = TempDir::new().unwrap();
    signpath(&temp).assert().success().stdout(predicate::str::contains("signpath v"));
}

#[test]
fn test_translate_requires_text() {
    let temp = TempDir::new().unwrap();
    signpath(&temp).arg("translate").assert().failure();
}

#[test]
fn test_unknown_dictionary_kind() {
    let temp = TempDir::new().unwrap();
    signpath(&temp)
        .args(["add", "hi", "hi.png", "--to", "phrases"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown dictionary"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();
    signpath(&temp)
        .args(["--config", "missing.toml", "stats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}
