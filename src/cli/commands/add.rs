//! Add command - quick-add a dictionary entry

use signpath::config::Config;
use signpath::core::models::DictionaryKind;
use signpath::core::ports::AssetProbe;
use signpath::core::services::add_entry;
use signpath::output::{OperationResult, OutputMode};

/// Insert or overwrite one entry and save the dictionary
pub fn add(
    config: &Config,
    kind: DictionaryKind,
    key: &str,
    path: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let store = super::store(config);
    let previous = add_entry(&store, kind, key, path)?;

    let key = kind.canonical_key(key);
    let path = path.trim();
    if !kind.is_reachable_key(&key) {
        log::warn!(
            "Key '{key}' is not in normalized form (lowercase letters, digits, '_'); \
             translations will never match it"
        );
    }
    if !super::probe(config).exists(path) {
        log::warn!("Asset {path} does not exist; '{key}' will be skipped until it does");
    }

    let message = match previous {
        Some(old) => format!("Updated '{key}' in {}: {old} -> {path}", kind.file_name()),
        None => format!("Added '{key}' -> {path} to {}", kind.file_name()),
    };
    OperationResult {
        success: true,
        message,
    }
    .render(mode);

    Ok(())
}
