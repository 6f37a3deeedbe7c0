//! JSON dictionary store
//!
//! Implements the `DictionaryStore` port trait with one JSON file per
//! dictionary inside a data directory.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::core::models::{Dictionary, DictionaryKind};
use crate::core::ports::{DictionaryStore, StoreError};

use super::parser::{format_dictionary, load_file};

/// Dictionary store backed by `<data_dir>/{sentences,words,alphabet}.json`
#[derive(Debug, Clone)]
pub struct JsonDictionaryStore {
    data_dir: PathBuf,
}

impl JsonDictionaryStore {
    /// Create a store rooted at `data_dir`
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Directory holding the dictionary files
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file backing `kind`
    #[must_use]
    pub fn path_for(&self, kind: DictionaryKind) -> PathBuf {
        self.data_dir.join(kind.file_name())
    }
}

impl DictionaryStore for JsonDictionaryStore {
    fn load(&self, kind: DictionaryKind) -> Result<Dictionary, StoreError> {
        let path = self.path_for(kind);
        let dict = load_file(&path)?;
        log::debug!("Loaded {} {kind} entries from {}", dict.len(), path.display());
        Ok(dict)
    }

    fn save(&self, kind: DictionaryKind, dictionary: &Dictionary) -> Result<(), StoreError> {
        let path = self.path_for(kind);
        let io_err = |source| StoreError::Io {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.data_dir).map_err(io_err)?;
        let content = format_dictionary(dictionary)?;

        // Write to a sibling temp file and rename over the target
        let mut temp = NamedTempFile::new_in(&self.data_dir).map_err(io_err)?;
        temp.write_all(content.as_bytes()).map_err(io_err)?;
        temp.persist(&path).map_err(|e| io_err(e.error))?;

        log::debug!("Saved {} {kind} entries to {}", dictionary.len(), path.display());
        Ok(())
    }
}
