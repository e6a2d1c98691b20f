//! Listing record extraction module.

mod pipeline;
pub mod rules;

pub use pipeline::{ExtractReport, ListingPipeline};
pub use rules::{coerce_number, locate_records, resolve_field, value_text};
