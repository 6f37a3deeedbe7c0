//! Dictionary coverage - statistics and missing-asset audits

use serde::Serialize;

use crate::core::models::{Dictionaries, DictionaryKind};
use crate::core::ports::AssetProbe;

/// Sample sentence used when no stats text is given
pub const DEFAULT_SAMPLE_TEXT: &str = "yes thank you 8";

/// Dictionary sizes plus how far a sample sentence resolves
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Number of sentence entries
    pub sentences: usize,
    /// Number of word entries
    pub words: usize,
    /// Number of alphabet entries
    pub alphabet: usize,
    /// Words plus alphabet entries
    pub total_items: usize,
    /// The sample text that was resolved
    pub sample_text: String,
    /// Number of signs the sample text resolved to
    pub sample_signs: usize,
}

/// A dictionary entry whose asset does not exist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingAsset {
    /// Dictionary the entry lives in
    pub kind: DictionaryKind,
    /// Entry key
    pub key: String,
    /// Registered path that failed the probe
    pub path: String,
}

/// Compute dictionary statistics
#[must_use]
pub fn stats<P: AssetProbe + ?Sized>(dicts: &Dictionaries, exists: &P, sample_text: &str) -> Stats {
    Stats {
        sentences: dicts.sentences.len(),
        words: dicts.words.len(),
        alphabet: dicts.alphabet.len(),
        total_items: dicts.words.len() + dicts.alphabet.len(),
        sample_text: sample_text.to_string(),
        sample_signs: dicts.resolve(sample_text, exists).len(),
    }
}

/// List every entry whose asset fails the probe
///
/// Results are grouped by dictionary (sentences, words, alphabet) and keep
/// entry order within each.
#[must_use]
pub fn audit<P: AssetProbe + ?Sized>(dicts: &Dictionaries, exists: &P) -> Vec<MissingAsset> {
    DictionaryKind::ALL
        .into_iter()
        .flat_map(move |kind| {
            dicts
                .get(kind)
                .iter()
                .filter(move |(_, path)| !exists.exists(path))
                .map(move |(key, path)| MissingAsset {
                    kind,
                    key: key.to_string(),
                    path: path.to_string(),
                })
        })
        .collect()
}
