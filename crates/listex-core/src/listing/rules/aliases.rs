//! Field-name candidate tables for listing records.
//!
//! Order matters: earlier entries take precedence when a record carries
//! several spellings of the same field. Matching is case-insensitive, so
//! the mixed-case duplicates are harmless, but they stay in the tables for
//! callers that pass them through verbatim.

/// Accepted spellings for the price field.
pub const PRICE: &[&str] = &["price", "Price", "PRICE"];

/// Accepted spellings for the area field.
pub const AREA: &[&str] = &[
    "area",
    "Area",
    "size",
    "sqft",
    "square",
    "area_m2",
    "area_total",
];

/// Accepted spellings for the furnishing-status field.
pub const FURNISHING: &[&str] = &[
    "furnishingstatus",
    "furnishing_status",
    "furnished",
    "FurnishingStatus",
];
