//! Asset directory scanning
//!
//! Walks an asset directory (e.g. `static/words/`) and proposes one
//! dictionary entry per media file, keyed by the file stem.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::core::models::DictionaryKind;
use crate::core::models::token::normalize;

/// Extensions picked up by a scan unless the caller narrows them
pub const DEFAULT_ASSET_EXTENSIONS: &[&str] =
    &["png", "jpg", "jpeg", "webp", "gif", "mp4", "avi", "webm"];

/// Errors that can occur while scanning
#[derive(Debug, Error)]
pub enum ScanError {
    /// Scan root does not exist or is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Error walking directory tree
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

/// A media file found by a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedAsset {
    /// File name without extension
    pub stem: String,
    /// Full path of the file (root joined with the relative path)
    pub path: PathBuf,
}

/// Find media files under `root`, sorted by path
///
/// Hidden files and directories are skipped.
pub fn scan_assets<S: AsRef<str>>(
    root: &Path,
    extensions: &[S],
) -> Result<Vec<ScannedAsset>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let mut assets = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).into_iter().filter_entry(|e| {
        // Don't filter the root directory itself
        e.path() == root || !is_hidden(e)
    }) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !extensions.iter().any(|x| x.as_ref().trim_start_matches('.').eq_ignore_ascii_case(ext))
        {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        assets.push(ScannedAsset {
            stem: stem.to_string(),
            path: path.to_path_buf(),
        });
    }

    // Sort for deterministic output
    assets.sort_by(|a, b| a.path.cmp(&b.path));
    log::debug!("Scanned {} asset(s) under {}", assets.len(), root.display());
    Ok(assets)
}

/// Dictionary key for an asset file stem
///
/// - alphabet: upper-cased (`a.png` -> `A`)
/// - words: normalized like an input token (`Thank-You.png` -> `thankyou`)
/// - sentences: `_` and `-` split words, each normalized (`What's_up.mp4` -> `whats up`)
#[must_use]
pub fn key_for_stem(kind: DictionaryKind, stem: &str) -> String {
    match kind {
        DictionaryKind::Alphabet => stem.trim().to_uppercase(),
        DictionaryKind::Words => normalize(stem),
        DictionaryKind::Sentences => stem
            .replace(['_', '-'], " ")
            .split_whitespace()
            .map(normalize)
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
    }
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
}
