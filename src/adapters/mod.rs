//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `json/` - `sentences.json`, `words.json` and `alphabet.json` storage
//! - `filesystem/` - Asset existence probing and asset directory scanning

pub mod filesystem;
pub mod json;
