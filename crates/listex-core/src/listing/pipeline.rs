//! Filter-and-extract pipeline for listing records.

use std::time::Instant;

use serde_json::Value;
use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::summary::ListingSummary;

use super::rules::{coerce_number, locate_records, resolve_field, value_text};

/// Result of a filter-and-extract pass over one document.
#[derive(Debug, Clone, Default)]
pub struct ExtractReport {
    /// Output lines, one per surviving record, in document order.
    pub lines: Vec<String>,

    /// Number of records the locator produced.
    pub records_seen: usize,

    /// Records dropped by the furnished-only filter.
    pub skipped_furnishing: usize,

    /// Records dropped by the max-price filter.
    pub skipped_price: usize,

    /// Non-fatal extraction warnings.
    pub warnings: Vec<String>,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Filter-and-extract pipeline over located records.
///
/// Records flow through in document order: resolve the price, area and
/// furnishing fields, apply the furnished-only and max-price filters, then
/// render one summary line per surviving record. The pass never fails;
/// records it cannot make sense of produce empty-slot lines and a report
/// warning.
pub struct ListingPipeline {
    furnished_only: bool,
    max_price: Option<f64>,
    config: ExtractionConfig,
}

impl ListingPipeline {
    /// Create a pipeline with default alias lists and no filters.
    pub fn new() -> Self {
        Self {
            furnished_only: false,
            max_price: None,
            config: ExtractionConfig::default(),
        }
    }

    /// Create a pipeline resolving fields with the given alias lists.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            furnished_only: false,
            max_price: None,
            config: config.clone(),
        }
    }

    /// Set the furnished-only filter.
    pub fn with_furnished_only(mut self, enabled: bool) -> Self {
        self.furnished_only = enabled;
        self
    }

    /// Set the exclusive upper price bound. `None` disables the filter.
    pub fn with_max_price(mut self, max_price: Option<f64>) -> Self {
        self.max_price = max_price;
        self
    }

    /// Locate the record collection in `document` and process it.
    pub fn process_document(&self, document: &Value) -> ExtractReport {
        self.process_records(locate_records(document))
    }

    /// Process records in order, applying filters and building output lines.
    pub fn process_records(&self, records: &[Value]) -> ExtractReport {
        let start = Instant::now();
        let mut report = ExtractReport {
            records_seen: records.len(),
            ..Default::default()
        };

        debug!("processing {} records", records.len());

        // A NaN bound disables the price filter.
        let max_price = self.max_price.filter(|p| !p.is_nan());

        for (index, record) in records.iter().enumerate() {
            if !record.is_object() {
                report.warnings.push(format!("record {index} is not an object"));
            }

            let price = resolve_field(record, &self.config.price_aliases);
            let area = resolve_field(record, &self.config.area_aliases);
            let furnishing = resolve_field(record, &self.config.furnishing_aliases);

            if self.furnished_only && !is_furnished(furnishing) {
                report.skipped_furnishing += 1;
                continue;
            }

            let price_value = price.and_then(coerce_number);

            if let Some(max) = max_price {
                match price_value {
                    Some(p) if p < max => {}
                    _ => {
                        report.skipped_price += 1;
                        continue;
                    }
                }
            }

            let summary = ListingSummary {
                price: price_value,
                area: area.and_then(coerce_number),
            };
            report.lines.push(summary.line());
        }

        report.processing_time_ms = start.elapsed().as_millis() as u64;

        info!(
            "kept {} of {} records ({} furnishing-filtered, {} price-filtered)",
            report.lines.len(),
            report.records_seen,
            report.skipped_furnishing,
            report.skipped_price
        );

        report
    }
}

impl Default for ListingPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Furnished-only predicate over the resolved furnishing value.
///
/// A record passes when its furnishing value, rendered as lowercase text
/// (empty when missing or null), contains the substring `"furnish"` or
/// equals `"furnished"` exactly. Note that `"unfurnished"` contains
/// `"furnish"` and is therefore kept - the substring rule is literal.
fn is_furnished(value: Option<&Value>) -> bool {
    let text = value
        .and_then(value_text)
        .unwrap_or_default()
        .to_lowercase();
    text.contains("furnish") || text == "furnished"
}
