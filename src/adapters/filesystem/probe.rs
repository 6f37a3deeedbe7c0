//! Filesystem asset probe
//!
//! Relative asset paths are resolved against an assets root; absolute
//! paths are checked as-is.

use std::path::{Path, PathBuf};

use crate::core::ports::AssetProbe;

/// Asset probe that checks for regular files on disk
#[derive(Debug, Clone)]
pub struct FsAssetProbe {
    root: PathBuf,
}

impl FsAssetProbe {
    /// Create a probe resolving relative paths against `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root used for relative paths
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location an asset path refers to
    #[must_use]
    pub fn locate(&self, path: &str) -> PathBuf {
        let candidate = Path::new(path);
        if candidate.is_absolute() { candidate.to_path_buf() } else { self.root.join(candidate) }
    }
}

impl AssetProbe for FsAssetProbe {
    fn exists(&self, path: &str) -> bool {
        if path.trim().is_empty() {
            return false;
        }
        self.locate(path).is_file()
    }
}
