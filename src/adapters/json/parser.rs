//! JSON parser for dictionary documents
//!
//! A dictionary document is a single JSON object whose values are all
//! strings. Shape is validated here, at the storage boundary, so the
//! resolver can assume well-formed mappings.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::core::models::Dictionary;
use crate::core::ports::StoreError;

/// Parse and validate a dictionary document
///
/// `source_name` is only used in error messages.
pub fn parse_dictionary(content: &str, source_name: &str) -> Result<Dictionary, StoreError> {
    let value: Value = serde_json::from_str(content).map_err(|source| StoreError::Json {
        source_name: source_name.to_string(),
        source,
    })?;

    let Value::Object(map) = value else {
        return Err(StoreError::Malformed {
            source_name: source_name.to_string(),
            reason: format!("expected a JSON object, found {}", type_name(&value)),
        });
    };

    let mut dict = Dictionary::new();
    for (key, value) in map {
        match value {
            Value::String(path) => {
                dict.insert(key, path);
            },
            other => {
                return Err(StoreError::Malformed {
                    source_name: source_name.to_string(),
                    reason: format!("value for {key:?} is {}, expected a string", type_name(&other)),
                });
            },
        }
    }

    Ok(dict)
}

/// Load a dictionary file; a missing file is an empty dictionary
pub fn load_file(path: &Path) -> Result<Dictionary, StoreError> {
    if !path.exists() {
        log::debug!("{} not found, starting empty", path.display());
        return Ok(Dictionary::new());
    }

    let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_dictionary(&content, &path.display().to_string())
}

/// Format a dictionary as pretty JSON (2-space indent, entry order kept)
pub fn format_dictionary(dict: &Dictionary) -> Result<String, StoreError> {
    let mut out = serde_json::to_string_pretty(dict).map_err(|source| StoreError::Json {
        source_name: "dictionary".to_string(),
        source,
    })?;
    out.push('\n');
    Ok(out)
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
