//! Configuration management
//!
//! Settings are read from TOML. Lookup order:
//!
//! 1. An explicit `--config` path
//! 2. `.signpath.toml` in the current directory
//! 3. `~/.signpath/config.toml`
//! 4. Built-in defaults
//!
//! Relative paths inside a config file are resolved against the directory
//! containing that file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::DEFAULT_VIDEO_EXTENSIONS;
use crate::core::services::DEFAULT_SAMPLE_TEXT;
use crate::paths;

/// Slowest allowed playback speed
pub const MIN_SPEED: f32 = 0.5;

/// Fastest allowed playback speed
pub const MAX_SPEED: f32 = 2.0;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config {path}: {source}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config {source_name}: {source}")]
    Parse {
        /// Config file path or description
        source_name: String,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },

    /// Playback speed outside the supported range
    #[error("playback speed {0} out of range (0.5..=2.0)")]
    InvalidSpeed(f32),
}

/// signpath configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding `sentences.json`, `words.json` and `alphabet.json`
    /// (the working directory when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Base for relative asset paths (defaults to `data_dir`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets_root: Option<PathBuf>,
    /// Extensions rendered as video rather than image
    pub video_extensions: Vec<String>,
    /// Text resolved by `stats` when none is given
    pub sample_text: String,
    /// Playback hints passed along with translations
    pub playback: PlaybackConfig,
}

/// Playback preferences for rendering surfaces
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Start clips automatically
    pub autoplay: bool,
    /// Playback rate multiplier
    pub speed: f32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            speed: 1.0,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            assets_root: None,
            video_extensions: DEFAULT_VIDEO_EXTENSIONS.iter().map(|e| (*e).to_string()).collect(),
            sample_text: DEFAULT_SAMPLE_TEXT.to_string(),
            playback: PlaybackConfig::default(),
        }
    }
}

impl Config {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str, source_name: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            source_name: source_name.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, resolving relative paths against its directory
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content, &path.display().to_string())?;

        log::debug!("Loaded config from {}", path.display());
        Ok(match path.parent() {
            Some(base) if !base.as_os_str().is_empty() => config.rebase(base),
            _ => config,
        })
    }

    /// Find and load the effective configuration
    ///
    /// An explicit path must exist; the implicit locations are optional.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let project = paths::project_config(cwd);
        if project.is_file() {
            return Self::load_from(&project);
        }

        let global = paths::global_config();
        if global.is_file() {
            return Self::load_from(&global);
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        let speed = self.playback.speed;
        if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
            return Err(ConfigError::InvalidSpeed(speed));
        }
        Ok(())
    }

    /// Override the data directory
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }

    /// Directory holding the dictionary files
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        self.data_dir.as_deref().unwrap_or_else(|| Path::new("."))
    }

    /// Base directory for relative asset paths
    #[must_use]
    pub fn assets_root(&self) -> &Path {
        self.assets_root.as_deref().unwrap_or_else(|| self.data_dir())
    }

    /// Resolve relative directories set in the file against `base`
    ///
    /// Unset directories keep their working-directory default.
    fn rebase(mut self, base: &Path) -> Self {
        for dir in [self.data_dir.as_mut(), self.assets_root.as_mut()].into_iter().flatten() {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }
        self
    }
}
