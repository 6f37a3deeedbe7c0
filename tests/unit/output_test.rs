//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use signpath::config::PlaybackConfig;
use signpath::core::models::{DEFAULT_VIDEO_EXTENSIONS, Dictionary, DictionaryKind, MediaKind};
use signpath::core::services::{ImportMode, ImportSummary, MissingAsset, Stats};
use signpath::output::{
    AuditResult, DictionaryView, ImportResult, OperationResult, OutputMode, ShowResult,
    StatsResult, TranslateResult,
};

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn translate_result_serialization() {
    let result = TranslateResult::new(
        "yes hello",
        vec!["static/words/yes.png".to_string(), "static/words/hello.mp4".to_string()],
        DEFAULT_VIDEO_EXTENSIONS,
        PlaybackConfig::default(),
    );

    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(json["input"], "yes hello");
    assert_eq!(json["found"], true);
    assert_eq!(json["signs"][0]["name"], "yes.png");
    assert_eq!(json["signs"][0]["media"], "image");
    assert_eq!(json["signs"][1]["media"], "video");
    assert_eq!(json["playback"]["autoplay"], true);
}

#[test]
fn translate_result_media_uses_configured_extensions() {
    let result = TranslateResult::new(
        "hi",
        vec!["hi.webm".to_string()],
        &["webm".to_string()],
        PlaybackConfig::default(),
    );
    assert_eq!(result.signs[0].media, MediaKind::Video);
}

#[test]
fn show_result_keeps_entry_order() {
    let entries: Dictionary = [("zebra", "z.png"), ("apple", "a.png")].into_iter().collect();
    let result = ShowResult {
        dictionaries: vec![DictionaryView {
            kind: DictionaryKind::Words,
            count: entries.len(),
            entries,
        }],
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.find("zebra").unwrap() < json.find("apple").unwrap());
    assert!(json.contains(r#""kind":"words""#));
}

#[test]
fn stats_result_is_flat() {
    let result = StatsResult {
        stats: Stats {
            sentences: 0,
            words: 2,
            alphabet: 6,
            total_items: 8,
            sample_text: "yes thank you 8".to_string(),
            sample_signs: 8,
        },
    };

    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(json["total_items"], 8);
    assert_eq!(json["sample_signs"], 8);
}

#[test]
fn audit_result_passed() {
    let clean = AuditResult {
        checked: 3,
        missing: vec![],
    };
    assert!(clean.passed());

    let dirty = AuditResult {
        checked: 3,
        missing: vec![MissingAsset {
            kind: DictionaryKind::Alphabet,
            key: "Z".to_string(),
            path: "Z.png".to_string(),
        }],
    };
    assert!(!dirty.passed());

    let json = serde_json::to_string(&dirty).unwrap();
    assert!(json.contains(r#""kind":"alphabet""#));
}

#[test]
fn import_result_serialization() {
    let result = ImportResult {
        source: "upload.json".to_string(),
        summary: ImportSummary {
            kind: DictionaryKind::Words,
            mode: ImportMode::Merge,
            imported: 2,
            added: 1,
            total: 3,
        },
    };

    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(json["mode"], "merge");
    assert_eq!(json["added"], 1);
}

#[test]
fn operation_result_serialization() {
    let result = OperationResult {
        success: true,
        message: "Added 'yes'".to_string(),
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains(r#""success":true"#));
}
