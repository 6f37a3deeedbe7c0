//! JSON-backed dictionary storage
//!
//! Implements `DictionaryStore` using one JSON object per dictionary,
//! mapping keys to asset paths.
//!
//! - [`parser`] - Read and validate dictionary documents
//! - [`store`] - `DictionaryStore` implementation with atomic writes

pub mod parser;
pub mod store;

pub use parser::{format_dictionary, load_file, parse_dictionary};
pub use store::JsonDictionaryStore;
