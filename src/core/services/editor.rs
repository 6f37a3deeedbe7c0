//! Dictionary editing - quick-add and bulk import
//!
//! Mutations go through a [`DictionaryStore`] and never touch snapshots a
//! resolver may be holding; callers reload after editing.

use serde::Serialize;

use crate::core::models::{Dictionary, DictionaryKind};
use crate::core::ports::{DictionaryStore, StoreError};

/// How imported entries combine with the existing dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    /// Replace the whole dictionary with the imported entries
    #[default]
    Replace,
    /// Insert imported entries, overwriting keys that already exist
    Merge,
}

/// Outcome of an import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Target dictionary
    pub kind: DictionaryKind,
    /// How the entries were applied
    pub mode: ImportMode,
    /// Entries in the imported document
    pub imported: usize,
    /// Keys that did not exist before
    pub added: usize,
    /// Entries in the dictionary after the import
    pub total: usize,
}

/// Insert or overwrite one entry, returning the path it replaced
pub fn add_entry<S: DictionaryStore + ?Sized>(
    store: &S,
    kind: DictionaryKind,
    key: &str,
    path: &str,
) -> Result<Option<String>, StoreError> {
    let key = kind.canonical_key(key);
    let path = path.trim();
    if key.is_empty() || path.is_empty() {
        return Err(StoreError::EmptyEntry);
    }

    let mut dict = store.load(kind)?;
    let previous = dict.insert(key, path);
    store.save(kind, &dict)?;
    Ok(previous)
}

/// Apply an imported dictionary to the store
pub fn import_entries<S: DictionaryStore + ?Sized>(
    store: &S,
    kind: DictionaryKind,
    incoming: Dictionary,
    mode: ImportMode,
) -> Result<ImportSummary, StoreError> {
    let mut canonical = Dictionary::new();
    for (key, path) in incoming.iter() {
        let key = kind.canonical_key(key);
        if key.is_empty() || path.trim().is_empty() {
            return Err(StoreError::EmptyEntry);
        }
        canonical.insert(key, path.trim());
    }
    let imported = canonical.len();

    let (dict, added) = match mode {
        ImportMode::Replace => (canonical, imported),
        ImportMode::Merge => {
            let mut existing = store.load(kind)?;
            let added = existing.merge(canonical);
            (existing, added)
        },
    };

    store.save(kind, &dict)?;
    Ok(ImportSummary {
        kind,
        mode,
        imported,
        added,
        total: dict.len(),
    })
}
