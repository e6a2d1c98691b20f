//! Rule functions for tolerant record extraction.
//!
//! Each rule is total: odd shapes yield sentinel results (`None`, a
//! wrapped single-record sequence), never errors.

pub mod aliases;
pub mod coerce;
pub mod locate;
pub mod resolve;

pub use coerce::{coerce_number, value_text};
pub use locate::locate_records;
pub use resolve::resolve_field;
