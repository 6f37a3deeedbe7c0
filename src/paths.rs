//! Centralized path definitions for signpath
//!
//! This module provides a single source of truth for all filesystem paths
//! used by signpath.
//!
//! ## Storage Layout
//!
//! ### Per-Project (data directory)
//!
//! ```text
//! project/
//! ├── .signpath.toml          # Project configuration (optional)
//! ├── sentences.json          # Sentence key -> asset path
//! ├── words.json              # Word key -> asset path
//! ├── alphabet.json           # Letter/digit key -> asset path
//! └── static/
//!     ├── sentences/          # Default scan locations
//!     ├── words/
//!     └── alphabet/
//! ```
//!
//! ### Global (User-Level)
//!
//! ```text
//! ~/.signpath/
//! └── config.toml             # User defaults
//! ```

use std::path::{Path, PathBuf};

use crate::core::models::DictionaryKind;

// =============================================================================
// Project-level paths
// =============================================================================

/// Project configuration filename
pub const PROJECT_CONFIG: &str = ".signpath.toml";

/// Directory holding the bundled sign assets
const STATIC_DIR: &str = "static";

/// Get path to `.signpath.toml` in the given directory.
#[must_use]
pub fn project_config(dir: &Path) -> PathBuf {
    dir.join(PROJECT_CONFIG)
}

/// Get the conventional asset directory for a dictionary kind.
///
/// Returns `<assets_root>/static/<kind>/`, where scans look by default.
#[must_use]
pub fn static_dir(assets_root: &Path, kind: DictionaryKind) -> PathBuf {
    assets_root.join(STATIC_DIR).join(kind.to_string())
}

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Global config directory name
const GLOBAL_DIR: &str = ".signpath";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global signpath directory.
///
/// Returns `~/.signpath/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.signpath/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
