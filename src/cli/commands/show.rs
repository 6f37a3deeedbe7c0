//! Show command - print dictionary contents

use signpath::config::Config;
use signpath::core::models::DictionaryKind;
use signpath::core::ports::DictionaryStore;
use signpath::output::{DictionaryView, OutputMode, ShowResult};

/// Show one dictionary, or all three
pub fn show(config: &Config, kind: Option<DictionaryKind>, mode: OutputMode) -> anyhow::Result<()> {
    let store = super::store(config);
    let kinds = kind.map_or_else(|| DictionaryKind::ALL.to_vec(), |k| vec![k]);

    let mut dictionaries = Vec::with_capacity(kinds.len());
    for kind in kinds {
        let entries = store.load(kind)?;
        dictionaries.push(DictionaryView {
            kind,
            count: entries.len(),
            entries,
        });
    }

    ShowResult { dictionaries }.render(mode);
    Ok(())
}
