//! Initialize a signpath data directory

use std::fs;

use signpath::config::Config;
use signpath::core::models::{Dictionary, DictionaryKind};
use signpath::core::ports::DictionaryStore;
use signpath::output::{OperationResult, OutputMode};
use signpath::paths;

/// Create empty dictionaries and the conventional asset folders
pub fn init(config: &Config, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let store = super::store(config);
    let mut created = Vec::new();

    for kind in DictionaryKind::ALL {
        let path = store.path_for(kind);
        if path.exists() && !force {
            log::debug!("{} exists, leaving it alone", path.display());
            continue;
        }
        store.save(kind, &Dictionary::new())?;
        created.push(path.display().to_string());
    }

    for kind in DictionaryKind::ALL {
        let dir = paths::static_dir(config.assets_root(), kind);
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
            created.push(format!("{}/", dir.display()));
        }
    }

    let message = if created.is_empty() {
        "Already initialized. Use --force to reset the dictionaries.".to_string()
    } else {
        let mut message = String::from("Initialized signpath:");
        for item in &created {
            message.push_str("\n  created ");
            message.push_str(item);
        }
        message
    };

    OperationResult {
        success: true,
        message,
    }
    .render(mode);
    Ok(())
}
