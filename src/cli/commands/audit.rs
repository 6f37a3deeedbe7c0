//! Audit command - find entries pointing at missing assets

use signpath::config::Config;
use signpath::core::ports::DictionaryStore;
use signpath::core::services;
use signpath::output::{AuditResult, OutputMode};

/// Report missing assets; exits with status 1 if any are found
pub fn audit(config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let dicts = super::store(config).load_all()?;
    let checked = dicts.sentences.len() + dicts.words.len() + dicts.alphabet.len();

    let missing = services::audit(&dicts, &super::probe(config));
    let result = AuditResult { checked, missing };
    result.render(mode);

    if !result.passed() {
        std::process::exit(1);
    }
    Ok(())
}
