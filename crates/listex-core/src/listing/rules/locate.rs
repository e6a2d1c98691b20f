//! Record collection location inside arbitrarily-shaped documents.

use serde_json::Value;

/// Locate the sequence of records inside a parsed document.
///
/// The search is exactly one level deep: the document itself when it is an
/// array, otherwise the first array-valued property in document key order,
/// otherwise the document wrapped as a single record. Every input yields
/// some sequence; arrays nested deeper than one level are deliberately not
/// found.
pub fn locate_records(document: &Value) -> &[Value] {
    if let Value::Array(items) = document {
        return items;
    }

    if let Value::Object(map) = document {
        for value in map.values() {
            if let Value::Array(items) = value {
                return items;
            }
        }
    }

    std::slice::from_ref(document)
}
