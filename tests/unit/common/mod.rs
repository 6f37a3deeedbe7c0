//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing signpath components.

use std::fs;
use std::path::Path;

use signpath::adapters::filesystem::FsAssetProbe;
use signpath::adapters::json::JsonDictionaryStore;
use signpath::core::models::DictionaryKind;
use tempfile::TempDir;

/// A data directory with dictionaries and asset files
pub struct TestLibrary {
    dir: TempDir,
}

impl TestLibrary {
    /// Create a library with the standard layout:
    /// ```text
    /// /
    /// ├── words.json        {"yes", "you"}
    /// ├── alphabet.json     {T, H, A, N, K, 8}
    /// ├── sentences.json    {}
    /// └── static/
    ///     ├── words/yes.png, you.png
    ///     └── alphabet/T.png, H.png, A.png, N.png, K.png, 8.png
    /// ```
    pub fn new() -> Self {
        let library = Self::empty();

        library.add_asset("static/words/yes.png");
        library.add_asset("static/words/you.png");
        for ch in ["T", "H", "A", "N", "K", "8"] {
            library.add_asset(&format!("static/alphabet/{ch}.png"));
        }

        library.write_dictionary(
            DictionaryKind::Words,
            r#"{"yes": "static/words/yes.png", "you": "static/words/you.png"}"#,
        );
        library.write_dictionary(
            DictionaryKind::Alphabet,
            r#"{
                "T": "static/alphabet/T.png",
                "H": "static/alphabet/H.png",
                "A": "static/alphabet/A.png",
                "N": "static/alphabet/N.png",
                "K": "static/alphabet/K.png",
                "8": "static/alphabet/8.png"
            }"#,
        );
        library.write_dictionary(DictionaryKind::Sentences, "{}");

        library
    }

    /// Create a library with no files at all
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Root of the library
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Store over this library's dictionaries
    pub fn store(&self) -> JsonDictionaryStore {
        JsonDictionaryStore::new(self.path())
    }

    /// Probe resolving assets against this library
    pub fn probe(&self) -> FsAssetProbe {
        FsAssetProbe::new(self.path())
    }

    /// Create an (empty) asset file
    pub fn add_asset(&self, relative: &str) {
        let full_path = self.dir.path().join(relative);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, b"asset").unwrap();
    }

    /// Delete an asset file
    pub fn remove_asset(&self, relative: &str) {
        fs::remove_file(self.dir.path().join(relative)).unwrap();
    }

    /// Overwrite a dictionary file with raw JSON
    pub fn write_dictionary(&self, kind: DictionaryKind, json: &str) {
        fs::write(self.dir.path().join(kind.file_name()), json).unwrap();
    }

    /// Read a dictionary file as raw text
    pub fn read_dictionary(&self, kind: DictionaryKind) -> String {
        fs::read_to_string(self.dir.path().join(kind.file_name())).unwrap()
    }
}

impl Default for TestLibrary {
    fn default() -> Self {
        Self::new()
    }
}
