//! Dictionary model
//!
//! A dictionary maps a key to the path of a pre-recorded sign asset.
//! Entries keep the order they were loaded in, which makes the
//! "first sentence wins" rule of the resolver deterministic.

use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::DictionaryKind;

/// Ordered mapping from key to asset path
///
/// Keys are unique. Inserting an existing key overwrites its path in place;
/// inserting a new key appends it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl Dictionary {
    /// Create an empty dictionary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the asset path registered under `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&i| self.entries[i].1.as_str())
    }

    /// Whether `key` is registered
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Insert or overwrite an entry, returning the previous path if any
    pub fn insert(&mut self, key: impl Into<String>, path: impl Into<String>) -> Option<String> {
        let key = key.into();
        let path = path.into();

        if let Some(&i) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[i].1, path));
        }

        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, path));
        None
    }

    /// Merge another dictionary into this one; incoming paths win
    ///
    /// Returns the number of keys that were newly added.
    pub fn merge(&mut self, other: Self) -> usize {
        let mut added = 0;
        for (key, path) in other.entries {
            if self.insert(key, path).is_none() {
                added += 1;
            }
        }
        added
    }

    /// Iterate entries in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, p)| (k.as_str(), p.as_str()))
    }

    /// Iterate keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        for (key, path) in iter {
            dict.insert(key, path);
        }
        dict
    }
}

impl Serialize for Dictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, path) in &self.entries {
            map.serialize_entry(key, path)?;
        }
        map.end()
    }
}

/// Immutable snapshots of the three dictionaries used for one resolution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dictionaries {
    /// Whole-sentence signs
    pub sentences: Dictionary,
    /// Single-word signs
    pub words: Dictionary,
    /// Letter and digit signs
    pub alphabet: Dictionary,
}

impl Dictionaries {
    /// Borrow the dictionary of the given kind
    #[must_use]
    pub const fn get(&self, kind: DictionaryKind) -> &Dictionary {
        match kind {
            DictionaryKind::Sentences => &self.sentences,
            DictionaryKind::Words => &self.words,
            DictionaryKind::Alphabet => &self.alphabet,
        }
    }

    /// Mutably borrow the dictionary of the given kind
    pub const fn get_mut(&mut self, kind: DictionaryKind) -> &mut Dictionary {
        match kind {
            DictionaryKind::Sentences => &mut self.sentences,
            DictionaryKind::Words => &mut self.words,
            DictionaryKind::Alphabet => &mut self.alphabet,
        }
    }
}
