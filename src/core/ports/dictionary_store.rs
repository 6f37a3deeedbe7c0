//! Dictionary store port
//!
//! Defines the interface for loading and persisting the three dictionaries.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::models::{Dictionaries, Dictionary, DictionaryKind};

/// Errors raised at the dictionary storage boundary
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("io error on {path}: {source}")]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The backing document is not valid JSON
    #[error("invalid JSON in {source_name}: {source}")]
    Json {
        /// File or upload name
        source_name: String,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// The document is valid JSON but not a string-to-string object
    #[error("malformed dictionary {source_name}: {reason}")]
    Malformed {
        /// File or upload name
        source_name: String,
        /// What was wrong with it
        reason: String,
    },

    /// An entry with an empty key or path was submitted
    #[error("dictionary entries need a non-empty key and path")]
    EmptyEntry,
}

/// Storage backend for dictionaries
///
/// Implementations decide where the three mappings live (JSON files,
/// databases, ...). A dictionary that has never been saved loads as empty.
pub trait DictionaryStore {
    /// Load one dictionary
    fn load(&self, kind: DictionaryKind) -> Result<Dictionary, StoreError>;

    /// Persist one dictionary, replacing its previous contents
    fn save(&self, kind: DictionaryKind, dictionary: &Dictionary) -> Result<(), StoreError>;

    /// Load all three dictionaries, failing on the first malformed one
    fn load_all(&self) -> Result<Dictionaries, StoreError> {
        Ok(Dictionaries {
            sentences: self.load(DictionaryKind::Sentences)?,
            words: self.load(DictionaryKind::Words)?,
            alphabet: self.load(DictionaryKind::Alphabet)?,
        })
    }

    /// Load all three dictionaries, treating unreadable ones as empty
    fn load_all_lenient(&self) -> Dictionaries {
        let mut dicts = Dictionaries::default();
        for kind in DictionaryKind::ALL {
            match self.load(kind) {
                Ok(dict) => *dicts.get_mut(kind) = dict,
                Err(err) => log::warn!("Invalid {kind} dictionary, using empty: {err}"),
            }
        }
        dicts
    }
}
