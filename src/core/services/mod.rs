//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services perform no I/O themselves - asset existence and
//! dictionary persistence come in through the port traits.
//!
//! - [`resolver`] - Translate text into an ordered list of asset paths
//! - [`coverage`] - Dictionary statistics and missing-asset audits
//! - [`editor`] - Add and import dictionary entries through a store

pub mod coverage;
pub mod editor;
pub mod resolver;

pub use coverage::{DEFAULT_SAMPLE_TEXT, MissingAsset, Stats, audit, stats};
pub use editor::{ImportMode, ImportSummary, add_entry, import_entries};
pub use resolver::resolve;
