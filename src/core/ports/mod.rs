//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core resolution logic
//! and external systems (filesystem, dictionary storage).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations. Tests swap in closures or in-memory stores.

mod asset_probe;
mod dictionary_store;

pub use asset_probe::AssetProbe;
pub use dictionary_store::{DictionaryStore, StoreError};
