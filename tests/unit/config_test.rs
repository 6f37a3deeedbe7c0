//! Tests for configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use signpath::config::{Config, ConfigError};
use tempfile::TempDir;

// =============================================================================
// BASIC CONFIG TESTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.sample_text, "yes thank you 8");
    assert!(config.playback.autoplay);
    assert!((config.playback.speed - 1.0).abs() < f32::EPSILON);
}

#[test]
fn test_full_document() {
    let config = Config::from_toml_str(
        r#"
data_dir = "/srv/signs"
assets_root = "/srv/media"
video_extensions = ["webm"]
sample_text = "hello"

[playback]
autoplay = false
speed = 0.5
"#,
        "inline",
    )
    .unwrap();

    assert_eq!(config.data_dir(), Path::new("/srv/signs"));
    assert_eq!(config.assets_root(), Path::new("/srv/media"));
    assert_eq!(config.video_extensions, vec!["webm"]);
    assert!(!config.playback.autoplay);
}

#[test]
fn test_unknown_types_are_parse_errors() {
    let err = Config::from_toml_str("sample_text = 5\n", "inline").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_speed_bounds() {
    assert!(Config::from_toml_str("[playback]\nspeed = 2.0\n", "inline").is_ok());
    assert!(Config::from_toml_str("[playback]\nspeed = 0.4\n", "inline").is_err());
}

// =============================================================================
// OVERRIDES
// =============================================================================

#[test]
fn test_with_data_dir_moves_default_assets_root() {
    let config = Config::default().with_data_dir("/data");
    assert_eq!(config.assets_root(), Path::new("/data"));
}

#[test]
fn test_explicit_assets_root_survives_data_dir_override() {
    let config = Config {
        assets_root: Some(PathBuf::from("/media")),
        ..Config::default()
    }
    .with_data_dir("/data");
    assert_eq!(config.assets_root(), Path::new("/media"));
}

// =============================================================================
// DISCOVERY
// =============================================================================

#[test]
fn test_explicit_path_wins_over_project_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".signpath.toml"), "sample_text = \"project\"\n").unwrap();
    let explicit = temp.path().join("other.toml");
    fs::write(&explicit, "sample_text = \"explicit\"\n").unwrap();

    let config = Config::discover(Some(&explicit), temp.path()).unwrap();
    assert_eq!(config.sample_text, "explicit");
}

#[test]
fn test_invalid_project_file_is_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".signpath.toml"), "data_dir = [\n").unwrap();

    assert!(Config::discover(None, temp.path()).is_err());
}
