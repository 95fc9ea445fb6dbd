//! Import of externally supplied entry collections

use crate::domain::entry::JournalEntry;
use crate::error::{MindcapsError, Result};
use serde_json::Value;
use std::str::FromStr;

/// How imported entries combine with the existing collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// Discard the current collection
    Replace,
    /// Put imported entries in front of the current ones, keeping duplicates
    Merge,
}

impl FromStr for ImportMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "replace" => Ok(ImportMode::Replace),
            "merge" => Ok(ImportMode::Merge),
            _ => Err(format!(
                "Invalid import mode: '{}'. Valid modes are: replace, merge",
                s
            )),
        }
    }
}

/// Parse an export document into a typed entry collection.
///
/// The top level must be a JSON array and every element a well-formed entry.
pub fn parse_entries(payload: &str) -> Result<Vec<JournalEntry>> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|e| MindcapsError::InvalidFormat(format!("not valid JSON ({})", e)))?;

    let Value::Array(items) = value else {
        return Err(MindcapsError::InvalidFormat(format!(
            "expected a JSON array at the top level, found {}",
            json_kind(&value)
        )));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| {
                MindcapsError::InvalidFormat(format!("entry {} is malformed: {}", index, e))
            })
        })
        .collect()
}

/// Combine `incoming` with `current` according to `mode`
pub fn import_entries(
    current: Vec<JournalEntry>,
    incoming: Vec<JournalEntry>,
    mode: ImportMode,
) -> Vec<JournalEntry> {
    match mode {
        ImportMode::Replace => incoming,
        ImportMode::Merge => {
            let mut merged = incoming;
            merged.extend(current);
            merged
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
