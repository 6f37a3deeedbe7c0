//! Domain models for signpath
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Dictionary`] - Ordered mapping from a key to an asset path
//! - [`Dictionaries`] - The sentence, word and alphabet snapshots together
//! - [`DictionaryKind`] - Which of the three dictionaries an entry belongs to
//! - [`MediaKind`] - Whether an asset renders as an image or a video
//! - [`token`] - Input tokenization and normalization

mod dictionary;
mod kind;
mod media;
pub mod token;

pub use dictionary::{Dictionaries, Dictionary};
pub use kind::DictionaryKind;
pub use media::{DEFAULT_VIDEO_EXTENSIONS, MediaKind};
