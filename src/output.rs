//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::config::PlaybackConfig;
use crate::core::models::{Dictionary, DictionaryKind, MediaKind};
use crate::core::services::{ImportSummary, MissingAsset, Stats};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A resolved sign ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignInfo {
    /// Asset path as registered in the dictionary
    pub path: String,
    /// File name shown as a caption
    pub name: String,
    /// Whether to render as image or video
    pub media: MediaKind,
}

impl SignInfo {
    /// Describe a resolved path
    #[must_use]
    pub fn new<S: AsRef<str>>(path: String, video_extensions: &[S]) -> Self {
        let name = Path::new(&path)
            .file_name()
            .map_or_else(|| path.clone(), |n| n.to_string_lossy().to_string());
        let media = MediaKind::classify(&path, video_extensions);
        Self { path, name, media }
    }
}

/// Result of a translate operation
#[derive(Debug, Serialize)]
pub struct TranslateResult {
    /// The text that was translated
    pub input: String,
    /// Whether at least one sign was found
    pub found: bool,
    /// Signs in input order
    pub signs: Vec<SignInfo>,
    /// Playback hints for the rendering surface
    pub playback: PlaybackConfig,
}

impl TranslateResult {
    /// Build a result from resolved paths
    #[must_use]
    pub fn new<S: AsRef<str>>(
        input: &str,
        paths: Vec<String>,
        video_extensions: &[S],
        playback: PlaybackConfig,
    ) -> Self {
        let signs: Vec<SignInfo> =
            paths.into_iter().map(|p| SignInfo::new(p, video_extensions)).collect();
        Self {
            input: input.to_string(),
            found: !signs.is_empty(),
            signs,
            playback,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if !self.found {
            println!("{}", "No signs found. Add to JSONs or check paths.".yellow());
            return;
        }

        println!("{}\n", "Signs (in order):".bold());
        for (i, sign) in self.signs.iter().enumerate() {
            println!("  {:>3}. {} [{}]", i + 1, sign.name, sign.media);
            println!("       {}", sign.path.dimmed());
        }
        println!("\nReady! {} sign(s) generated.", self.signs.len());
    }
}

/// One dictionary as shown by `show`
#[derive(Debug, Serialize)]
pub struct DictionaryView {
    /// Which dictionary
    pub kind: DictionaryKind,
    /// Number of entries
    pub count: usize,
    /// Entries in file order
    pub entries: Dictionary,
}

/// Result of a show operation
#[derive(Debug, Serialize)]
pub struct ShowResult {
    /// Dictionaries being shown
    pub dictionaries: Vec<DictionaryView>,
}

impl ShowResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        for view in &self.dictionaries {
            println!("{} ({} entries)", view.kind.to_string().bold(), view.count);
            if view.entries.is_empty() {
                println!("  (empty)");
            }
            for (key, path) in view.entries.iter() {
                println!("  {key} -> {path}");
            }
            println!();
        }
    }
}

/// Result of a stats operation
#[derive(Debug, Serialize)]
pub struct StatsResult {
    /// Computed statistics
    #[serde(flatten)]
    pub stats: Stats,
}

impl StatsResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        let s = &self.stats;
        println!("Sentences:   {}", s.sentences);
        println!("Words:       {}", s.words);
        println!("Alphabet:    {}", s.alphabet);
        println!("Total items: {}", s.total_items);
        println!();
        println!("Test coverage: \"{}\" -> {} sign(s)", s.sample_text, s.sample_signs);
    }
}

/// Result of an audit operation
#[derive(Debug, Serialize)]
pub struct AuditResult {
    /// Entries checked across all dictionaries
    pub checked: usize,
    /// Entries whose asset is missing
    pub missing: Vec<MissingAsset>,
}

impl AuditResult {
    /// Whether every entry's asset exists
    #[must_use]
    pub fn passed(&self) -> bool {
        self.missing.is_empty()
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.passed() {
            println!("All {} asset(s) present.", self.checked);
            return;
        }

        println!("Missing assets:\n");
        for m in &self.missing {
            println!("  [{}] {} -> {}", m.kind.to_string().to_uppercase(), m.key, m.path.red());
        }
        println!("\n{} of {} asset(s) missing", self.missing.len(), self.checked);
    }
}

/// Result of an import operation
#[derive(Debug, Serialize)]
pub struct ImportResult {
    /// Where the entries came from
    pub source: String,
    /// What the import did
    #[serde(flatten)]
    pub summary: ImportSummary,
}

impl ImportResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                let s = &self.summary;
                println!(
                    "Imported {} entries into {} ({:?}, {} new, {} total)",
                    s.imported,
                    s.kind.file_name(),
                    s.mode,
                    s.added,
                    s.total
                );
            },
            OutputMode::Json => render_json(self),
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
