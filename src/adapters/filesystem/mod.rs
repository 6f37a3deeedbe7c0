//! Filesystem adapters
//!
//! - [`probe`] - `AssetProbe` backed by the local filesystem
//! - [`scan`] - Discover asset files to register as dictionary entries

pub mod probe;
pub mod scan;

pub use probe::FsAssetProbe;
pub use scan::{DEFAULT_ASSET_EXTENSIONS, ScanError, ScannedAsset, key_for_stem, scan_assets};
