//! Input tokenization
//!
//! Tokens are whitespace-delimited words, lower-cased and stripped of every
//! character that is not a letter, digit or underscore. Normalizing one
//! token never looks at its neighbours.

/// Normalize a single raw word
///
/// Keeps chars with the Unicode `Alphabetic` or `Numeric` property plus
/// `_`, so combining vowel signs survive. Punctuation-only input
/// normalizes to the empty string.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().chars().filter(|c| c.is_alphanumeric() || *c == '_').collect()
}

/// Split text on whitespace and normalize each word, preserving order
///
/// Tokens that normalize to the empty string are kept so that callers see
/// one token per input word.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(normalize)
}

/// First whitespace-delimited word of a dictionary key
#[must_use]
pub fn first_word(key: &str) -> Option<&str> {
    key.split_whitespace().next()
}

/// Alphabet key used to look up a single character
#[must_use]
pub fn alphabet_key(ch: char) -> String {
    ch.to_uppercase().collect()
}
