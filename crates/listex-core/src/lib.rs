//! Core library for listing data extraction.
//!
//! This crate provides:
//! - JSON document loading with a typed failure taxonomy
//! - Record collection location inside arbitrarily-shaped documents
//! - Tolerant field resolution under multiple naming conventions
//! - Numeric coercion for mixed value encodings (numbers, formatted strings)
//! - The filter-and-extract pipeline producing "price area" summary lines

pub mod document;
pub mod error;
pub mod listing;
pub mod models;

pub use document::{load_document, parse_document};
pub use error::{DocumentError, ListexError, Result};
pub use listing::{ExtractReport, ListingPipeline, coerce_number, locate_records, resolve_field};
pub use models::config::{ExtractionConfig, ListexConfig};
pub use models::summary::ListingSummary;
