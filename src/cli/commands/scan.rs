//! Scan command - register asset files as dictionary entries

use std::fs;
use std::path::Path;

use signpath::adapters::filesystem::{DEFAULT_ASSET_EXTENSIONS, key_for_stem, scan_assets};
use signpath::config::Config;
use signpath::core::models::DictionaryKind;
use signpath::core::ports::DictionaryStore;
use signpath::output::{OperationResult, OutputMode};
use signpath::paths;

/// Scan a directory and register each media file under its stem
pub fn scan(
    config: &Config,
    dir: Option<&Path>,
    kind: DictionaryKind,
    keep_existing: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let root = dir.map_or_else(|| paths::static_dir(config.assets_root(), kind), Path::to_path_buf);

    let mut extensions: Vec<String> =
        DEFAULT_ASSET_EXTENSIONS.iter().map(|e| (*e).to_string()).collect();
    for ext in &config.video_extensions {
        let ext = ext.trim_start_matches('.');
        if !extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)) {
            extensions.push(ext.to_string());
        }
    }

    let assets = scan_assets(&root, &extensions)?;

    let store = super::store(config);
    let mut dict = store.load(kind)?;
    let (mut added, mut updated, mut skipped) = (0_usize, 0_usize, 0_usize);

    for asset in &assets {
        let key = key_for_stem(kind, &asset.stem);
        if key.is_empty() || (keep_existing && dict.contains_key(&key)) {
            skipped += 1;
            continue;
        }

        let path = storable_path(&asset.path, config.assets_root());
        if dict.insert(key, path).is_some() {
            updated += 1;
        } else {
            added += 1;
        }
    }

    store.save(kind, &dict)?;

    OperationResult {
        success: true,
        message: format!(
            "Scanned {} file(s) in {}: {added} added, {updated} updated, {skipped} skipped ({})",
            assets.len(),
            root.display(),
            kind.file_name()
        ),
    }
    .render(mode);
    Ok(())
}

/// Asset path as stored in a dictionary
///
/// Files under the assets root are stored relative to it so the data
/// directory can be moved; anything else is stored absolute.
fn storable_path(path: &Path, assets_root: &Path) -> String {
    let absolute = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let stored = fs::canonicalize(assets_root)
        .ok()
        .and_then(|root| absolute.strip_prefix(root).ok().map(Path::to_path_buf))
        .unwrap_or(absolute);
    stored.to_string_lossy().replace('\\', "/")
}
