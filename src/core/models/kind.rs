//! Dictionary kinds
//!
//! Identifies one of the three lookup tables and the file backing it.

use serde::{Deserialize, Serialize};

use super::token::{first_word, normalize};

/// One of the three lookup tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DictionaryKind {
    /// Whole-sentence signs, triggered by the first word of the key
    Sentences,
    /// Single-word signs
    #[default]
    Words,
    /// Letter and digit signs used to spell out unknown tokens
    Alphabet,
}

impl DictionaryKind {
    /// All kinds, in resolution precedence order
    pub const ALL: [Self; 3] = [Self::Sentences, Self::Words, Self::Alphabet];

    /// File name of the JSON document backing this dictionary
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Sentences => "sentences.json",
            Self::Words => "words.json",
            Self::Alphabet => "alphabet.json",
        }
    }

    /// Canonicalize a key before storing it
    ///
    /// Alphabet keys are looked up upper-cased, so they are stored that way.
    /// Other keys are only trimmed; see [`Self::is_reachable_key`].
    #[must_use]
    pub fn canonical_key(self, key: &str) -> String {
        match self {
            Self::Alphabet => key.trim().to_uppercase(),
            Self::Sentences | Self::Words => key.trim().to_string(),
        }
    }
}

impl DictionaryKind {
    /// Whether some input token could ever resolve to `key`
    ///
    /// Word keys and the first word of sentence keys are compared against
    /// normalized tokens, so they only match when already normalized.
    #[must_use]
    pub fn is_reachable_key(self, key: &str) -> bool {
        match self {
            Self::Words => !key.is_empty() && key == normalize(key),
            Self::Sentences => first_word(key).is_some_and(|word| word == normalize(word)),
            Self::Alphabet => !key.is_empty(),
        }
    }
}

impl std::fmt::Display for DictionaryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sentences => write!(f, "sentences"),
            Self::Words => write!(f, "words"),
            Self::Alphabet => write!(f, "alphabet"),
        }
    }
}

impl std::str::FromStr for DictionaryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sentence" | "sentences" => Ok(Self::Sentences),
            "word" | "words" => Ok(Self::Words),
            "alphabet" | "letters" => Ok(Self::Alphabet),
            _ => Err(format!("Unknown dictionary: {s}. Use: sentences, words, alphabet")),
        }
    }
}
