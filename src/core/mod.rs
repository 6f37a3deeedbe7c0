//! Core domain logic for signpath
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Dictionary, DictionaryKind, MediaKind, tokens)
//! - `services/` - Resolution and coverage logic
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
