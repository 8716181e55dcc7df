//! Record-count resolution for the success envelope's `records_count`.

use serde_json::Value;

/// Effective `records_count` for a serialized records payload.
///
/// An explicit count always wins and is not checked against `records`
/// (paginated listings pass the total here). Otherwise arrays count their
/// items, blank values (null, `false`, whitespace-only strings, empty objects)
/// count as zero, and anything else is a single record.
pub fn records_count(records: &Value, explicit: Option<u64>) -> u64 {
    if let Some(count) = explicit {
        return count;
    }
    match records {
        Value::Array(items) => items.len() as u64,
        Value::Null | Value::Bool(false) => 0,
        Value::String(s) if s.trim().is_empty() => 0,
        Value::Object(map) if map.is_empty() => 0,
        _ => 1,
    }
}
