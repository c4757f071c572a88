use std::collections::HashMap;

use serde_json::Value;

use crate::utils::value_as_path_segment;

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

/// Whether `record` has an `id` that reads the same as `record_id`.
pub fn has_id(record: &Value, record_id: &str) -> bool {
    record
        .get("id")
        .and_then(value_as_path_segment)
        .map_or(false, |id| id == record_id)
}

/// Whether every filter names a field of `record` whose value reads the same.
/// Filters starting with `_` are reserved and ignored.
pub fn matches_filters(record: &Value, filters: &HashMap<String, String>) -> bool {
    filters
        .iter()
        .filter(|(field, _)| !field.starts_with('_'))
        .all(|(field, expected)| {
            record
                .get(field)
                .and_then(value_as_path_segment)
                .map_or(false, |value| &value == expected)
        })
}
