//! Field extraction from loosely structured catalog feed entries.
//!
//! The works feed is not a stable schema: absent or malformed fields
//! degrade to defaults instead of failing the entry.

use alexandria_core::{Work, WorkKey};
use serde_json::Value;

/// Pulls the work key out of a feed entry.
///
/// Returns `None` when the key is missing, blank or not a string; such
/// entries cannot be stored and are skipped by the caller.
#[must_use]
pub fn extract_key(entry: &Value) -> Option<WorkKey> {
    entry
        .get("key")
        .and_then(Value::as_str)
        .and_then(|raw| WorkKey::new(raw).ok())
}

/// Pulls the title, falling back to [`Work::UNKNOWN_TITLE`].
#[must_use]
pub fn extract_title(entry: &Value) -> String {
    entry
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or(Work::UNKNOWN_TITLE)
        .to_string()
}

/// Pulls the description, which the catalog ships either as a plain string
/// or wrapped in a `{"type": ..., "value": "..."}` object.
#[must_use]
pub fn extract_description(entry: &Value) -> Option<String> {
    match entry.get("description") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Object(map)) => map.get("value").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

/// Pulls subject tags, keeping only string elements, in feed order.
#[must_use]
pub fn extract_subjects(entry: &Value) -> Vec<String> {
    entry
        .get("subjects")
        .and_then(Value::as_array)
        .map(|subjects| {
            subjects
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Pulls cover identifiers, keeping only integral elements, in feed order.
#[must_use]
pub fn extract_covers(entry: &Value) -> Vec<i64> {
    entry
        .get("covers")
        .and_then(Value::as_array)
        .map(|covers| covers.iter().filter_map(Value::as_i64).collect())
        .unwrap_or_default()
}
