//! Token resolver - maps text to sign asset paths
//!
//! Each normalized token is resolved independently, left to right, against
//! three tiers in strict precedence:
//!
//! 1. **Sentence** - the first sentence key whose own first word equals the
//!    token. Only the triggering token is consumed, not the rest of the
//!    sentence.
//! 2. **Word** - the token itself as a word key.
//! 3. **Alphabet** - each character of the token, upper-cased, spelled out.
//!    Characters without an entry are dropped.
//!
//! A candidate whose asset fails the probe is treated as absent and the
//! token falls through to the next tier. Nothing here errors: input that
//! cannot be translated simply yields fewer (or zero) paths.

use crate::core::models::token::{alphabet_key, first_word, tokenize};
use crate::core::models::{Dictionaries, Dictionary};
use crate::core::ports::AssetProbe;

/// Resolve `text` into an ordered list of existing asset paths
///
/// # Examples
///
/// ```
/// use signpath::core::models::Dictionary;
/// use signpath::core::services::resolve;
///
/// let words: Dictionary = [("yes", "yes.png")].into_iter().collect();
/// let alphabet: Dictionary = [("N", "N.png"), ("O", "O.png")].into_iter().collect();
/// let sentences = Dictionary::new();
///
/// let paths = resolve("Yes, no!", &sentences, &words, &alphabet, &|_: &str| true);
/// assert_eq!(paths, vec!["yes.png", "N.png", "O.png"]);
/// ```
#[must_use]
pub fn resolve<P: AssetProbe + ?Sized>(
    text: &str,
    sentences: &Dictionary,
    words: &Dictionary,
    alphabet: &Dictionary,
    exists: &P,
) -> Vec<String> {
    let mut result = Vec::new();

    for token in tokenize(text) {
        if token.is_empty() {
            continue;
        }

        if let Some(path) = sentence_match(&token, sentences).filter(|p| exists.exists(p)) {
            result.push(path.to_string());
            continue;
        }

        if let Some(path) = words.get(&token).filter(|p| exists.exists(p)) {
            result.push(path.to_string());
            continue;
        }

        for ch in token.chars() {
            if let Some(path) = alphabet.get(&alphabet_key(ch)).filter(|p| exists.exists(p)) {
                result.push(path.to_string());
            }
        }
    }

    result
}

/// Path of the first sentence whose first word is `token`
///
/// Later sentences sharing the same first word are never consulted, even
/// when the first one's asset turns out to be missing.
fn sentence_match<'a>(token: &str, sentences: &'a Dictionary) -> Option<&'a str> {
    sentences.iter().find(|(key, _)| first_word(key) == Some(token)).map(|(_, path)| path)
}

impl Dictionaries {
    /// Resolve `text` against these snapshots
    #[must_use]
    pub fn resolve<P: AssetProbe + ?Sized>(&self, text: &str, exists: &P) -> Vec<String> {
        resolve(text, &self.sentences, &self.words, &self.alphabet, exists)
    }
}
