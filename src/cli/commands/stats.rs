//! Stats command - dictionary sizes and sample coverage

use signpath::config::Config;
use signpath::core::ports::DictionaryStore;
use signpath::core::services;
use signpath::output::{OutputMode, StatsResult};

/// Print dictionary statistics
pub fn stats(config: &Config, text: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let dicts = super::store(config).load_all_lenient();
    let sample = text.unwrap_or(config.sample_text.as_str());

    let stats = services::stats(&dicts, &super::probe(config), sample);
    StatsResult { stats }.render(mode);
    Ok(())
}
