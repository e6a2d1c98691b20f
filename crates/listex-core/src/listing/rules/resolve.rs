//! Tolerant field resolution over listing records.

use serde_json::Value;

/// Resolve a field on a record by trying aliases in order.
///
/// Each alias is compared case-insensitively against the record's own keys
/// in document order; the first key matching the earliest alias wins. Keys
/// are never trimmed and never matched by substring. Non-object records
/// resolve nothing.
pub fn resolve_field<'a, S: AsRef<str>>(record: &'a Value, aliases: &[S]) -> Option<&'a Value> {
    let map = record.as_object()?;

    for alias in aliases {
        let alias = alias.as_ref().to_lowercase();
        for (key, value) in map {
            if key.to_lowercase() == alias {
                return Some(value);
            }
        }
    }

    None
}
