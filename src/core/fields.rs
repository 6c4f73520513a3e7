//! Field access helpers for loosely-shaped records.

use serde_json::Value;

use crate::core::traits::Record;

/// Text value of a field: non-empty strings as-is, numbers stringified.
/// Null, empty strings and structured values count as missing.
pub fn text_field(record: &Record, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// First key in `keys` that yields text, in order.
pub fn first_text(record: &Record, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| text_field(record, key))
}

/// Value of the first key in `keys` that is present at all, even when its
/// value is null.
pub fn first_present<'a>(record: &'a Record, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| record.get(*key))
}

/// Unwrap a JSON object literal into a record; other values become empty.
pub fn into_record(value: Value) -> Record {
    match value {
        Value::Object(record) => record,
        _ => Record::new(),
    }
}

/// Truncate an identifier to its first `len` characters for display.
pub fn short_id(id: &str, len: usize) -> &str {
    id.char_indices().nth(len).map_or(id, |(idx, _)| &id[..idx])
}
