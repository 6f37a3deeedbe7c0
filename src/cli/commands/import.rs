//! Import command - load a JSON dictionary file into the store

use std::fs;
use std::path::Path;

use anyhow::Context;

use signpath::adapters::json::parse_dictionary;
use signpath::config::Config;
use signpath::core::models::DictionaryKind;
use signpath::core::services::{ImportMode, import_entries};
use signpath::output::{ImportResult, OutputMode};

/// Import `file` into the dictionary of the given kind
pub fn import(
    config: &Config,
    file: &Path,
    kind: DictionaryKind,
    merge: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let source = file.display().to_string();
    let content =
        fs::read_to_string(file).with_context(|| format!("failed to read {source}"))?;
    let incoming = parse_dictionary(&content, &source)?;

    let unreachable = incoming
        .keys()
        .filter(|key| !kind.is_reachable_key(&kind.canonical_key(key)))
        .count();
    if unreachable > 0 {
        log::warn!(
            "{unreachable} key(s) in {source} are not normalized; translations will never match them"
        );
    }

    let import_mode = if merge { ImportMode::Merge } else { ImportMode::Replace };
    let summary = import_entries(&super::store(config), kind, incoming, import_mode)?;

    ImportResult { source, summary }.render(mode);
    Ok(())
}
