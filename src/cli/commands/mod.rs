//! Command implementations

mod add;
mod audit;
mod import;
mod init;
mod scan;
mod show;
mod stats;
mod translate;

pub use add::add;
pub use audit::audit;
pub use import::import;
pub use init::init;
pub use scan::scan;
pub use show::show;
pub use stats::stats;
pub use translate::translate;

use signpath::adapters::filesystem::FsAssetProbe;
use signpath::adapters::json::JsonDictionaryStore;
use signpath::config::Config;

/// Dictionary store for the configured data directory
fn store(config: &Config) -> JsonDictionaryStore {
    JsonDictionaryStore::new(config.data_dir())
}

/// Asset probe for the configured assets root
fn probe(config: &Config) -> FsAssetProbe {
    FsAssetProbe::new(config.assets_root())
}
