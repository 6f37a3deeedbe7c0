//! Translate command - resolve text into signs

use signpath::config::Config;
use signpath::core::ports::DictionaryStore;
use signpath::output::{OutputMode, TranslateResult};

/// Translate text and print the resolved signs
///
/// Exits with status 1 when nothing could be translated.
pub fn translate(config: &Config, text: &str, mode: OutputMode) -> anyhow::Result<()> {
    // Unreadable dictionaries degrade to empty so translation still runs
    let dicts = super::store(config).load_all_lenient();
    let probe = super::probe(config);

    let paths = dicts.resolve(text, &probe);
    log::debug!("Resolved {text:?} to {} sign(s)", paths.len());

    let result = TranslateResult::new(text, paths, &config.video_extensions, config.playback);
    result.render(mode);

    if !result.found {
        std::process::exit(1);
    }
    Ok(())
}
