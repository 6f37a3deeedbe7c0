//! Integration tests for the signpath CLI
//!
//! These tests build a real data directory with dictionaries and asset
//! files, then drive the binary through complete workflows.


use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create a signpath command isolated in `dir`
fn signpath(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("signpath"));
    cmd.env("HOME", dir).env_remove("RUST_LOG").current_dir(dir);
    cmd
}

/// Helper to create an asset file
fn add_asset(dir: &Path, relative: &str) {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"asset").unwrap();
}

/// Helper to lay out the reference library used by most tests
fn reference_library(dir: &Path) {
    add_asset(dir, "static/words/yes.png");
    add_asset(dir, "static/words/you.png");
    for ch in ["T", "H", "A", "N", "K", "8"] {
        add_asset(dir, &format!("static/alphabet/{ch}.png"));
    }

    fs::write(
        dir.join("words.json"),
        r#"{"yes": "static/words/yes.png", "you": "static/words/you.png"}"#,
    )
    .unwrap();
    fs::write(
        dir.join("alphabet.json"),
        r#"{"T": "static/alphabet/T.png", "H": "static/alphabet/H.png",
            "A": "static/alphabet/A.png", "N": "static/alphabet/N.png",
            "K": "static/alphabet/K.png", "8": "static/alphabet/8.png"}"#,
    )
    .unwrap();
}

// =============================================================================
// TRANSLATE
// =============================================================================

#[test]
fn test_translate_reference_sentence() {
    let temp = TempDir::new().unwrap();
    reference_library(temp.path());

    let output = signpath(temp.path())
        .args(["--json", "translate", "yes thank you 8"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let paths: Vec<&str> =
        json["signs"].as_array().unwrap().iter().map(|s| s["path"].as_str().unwrap()).collect();
    assert_eq!(
        paths,
        vec![
            "static/words/yes.png",
            "static/alphabet/T.png",
            "static/alphabet/H.png",
            "static/alphabet/A.png",
            "static/alphabet/N.png",
            "static/alphabet/K.png",
            "static/words/you.png",
            "static/alphabet/8.png",
        ]
    );
}

#[test]
fn test_translate_joins_multiple_arguments() {
    let temp = TempDir::new().unwrap();
    reference_library(temp.path());

    signpath(temp.path())
        .args(["translate", "yes", "you"])
        .assert()
        .success()
        .stdout(predicate::str::contains("yes.png"))
        .stdout(predicate::str::contains("you.png"))
        .stdout(predicate::str::contains("2 sign(s) generated"));
}

#[test]
fn test_translate_nothing_found_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    reference_library(temp.path());

    signpath(temp.path())
        .args(["translate", "zzz"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("No signs found"));
}

#[test]
fn test_translate_skips_deleted_assets() {
    let temp = TempDir::new().unwrap();
    reference_library(temp.path());
    fs::remove_file(temp.path().join("static/words/yes.png")).unwrap();

    // "yes" falls back to spelling; only no Y/E/S letters exist
    signpath(temp.path())
        .args(["translate", "yes"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("No signs found"));
}

#[test]
fn test_translate_tolerates_malformed_dictionary() {
    let temp = TempDir::new().unwrap();
    reference_library(temp.path());
    fs::write(temp.path().join("sentences.json"), "{oops").unwrap();

    signpath(temp.path()).args(["translate", "yes"]).assert().success();
}

// =============================================================================
// DATA DIRECTORY AND CONFIG
// =============================================================================

#[test]
fn test_data_dir_flag() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("library");
    fs::create_dir_all(&data).unwrap();
    reference_library(&data);

    signpath(temp.path())
        .args(["--data-dir", "library", "translate", "you"])
        .assert()
        .success()
        .stdout(predicate::str::contains("you.png"));
}

#[test]
fn test_project_config_sets_data_dir_and_video_extensions() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("library");
    fs::create_dir_all(&data).unwrap();
    add_asset(&data, "static/words/hello.webm");
    fs::write(data.join("words.json"), r#"{"hello": "static/words/hello.webm"}"#).unwrap();
    fs::write(
        temp.path().join(".signpath.toml"),
        "data_dir = \"library\"\nvideo_extensions = [\"webm\"]\n",
    )
    .unwrap();

    signpath(temp.path())
        .args(["--json", "translate", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"media\": \"video\""));
}

#[test]
fn test_global_config_without_data_dir_uses_working_directory() {
    let temp = TempDir::new().unwrap();
    reference_library(temp.path());
    let global = temp.path().join("home/.signpath");
    fs::create_dir_all(&global).unwrap();
    fs::write(global.join("config.toml"), "[playback]\nautoplay = false\n").unwrap();

    signpath(temp.path())
        .env("HOME", temp.path().join("home"))
        .args(["--json", "translate", "you"])
        .assert()
        .success()
        .stdout(predicate::str::contains("static/words/you.png"))
        .stdout(predicate::str::contains("\"autoplay\": false"));

    assert!(!global.join("words.json").exists());
}

#[test]
fn test_invalid_speed_in_config_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".signpath.toml"), "[playback]\nspeed = 9.0\n").unwrap();

    signpath(temp.path())
        .args(["translate", "yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("playback speed"));
}
