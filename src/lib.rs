//! signpath - Translate free-form text into sequences of sign-language media assets
//!
//! Text is resolved against three dictionaries (sentences, words, alphabet)
//! with strict precedence: a sentence match wins over a word match, and a
//! word match wins over spelling the token out character by character.
//!
//! The resolver itself lives in [`core`] and performs no I/O. Loading the
//! dictionaries, probing for asset files and rendering results are handled
//! by [`adapters`], [`config`] and [`output`].

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
