//! Summary model for extracted listing fields.

/// The coerced price/area pair extracted from one record.
///
/// Either side may be absent when the field was missing or failed to
/// coerce; the record still renders a line. Area units are whatever the
/// source data used.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingSummary {
    /// Coerced price, if any.
    pub price: Option<f64>,

    /// Coerced area, if any.
    pub area: Option<f64>,
}

impl ListingSummary {
    /// Render the space-joined output line.
    ///
    /// Each side renders as its canonical decimal string, or as the empty
    /// string when absent; trimming collapses the join when a side is
    /// empty, so a fully empty summary renders as `""`.
    pub fn line(&self) -> String {
        let price = render_quantity(self.price);
        let area = render_quantity(self.area);
        format!("{price} {area}").trim().to_string()
    }
}

/// Canonical decimal rendering of a coerced quantity.
fn render_quantity(value: Option<f64>) -> String {
    match value {
        // Negative zero renders as plain 0.
        Some(n) if n == 0.0 => "0".to_string(),
        Some(n) => format!("{n}"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_with_both_fields() {
        let summary = ListingSummary {
            price: Some(1000.0),
            area: Some(50.0),
        };
        assert_eq!(summary.line(), "1000 50");
    }

    #[test]
    fn test_line_trims_missing_sides() {
        let price_only = ListingSummary {
            price: Some(123.0),
            area: None,
        };
        assert_eq!(price_only.line(), "123");

        let area_only = ListingSummary {
            price: None,
            area: Some(45.0),
        };
        assert_eq!(area_only.line(), "45");

        assert_eq!(ListingSummary::default().line(), "");
    }

    #[test]
    fn test_integral_values_render_without_fraction() {
        let summary = ListingSummary {
            price: Some(2000.0),
            area: Some(80.5),
        };
        assert_eq!(summary.line(), "2000 80.5");
    }

    #[test]
    fn test_negative_zero_renders_as_zero() {
        let summary = ListingSummary {
            price: Some(-0.0),
            area: None,
        };
        assert_eq!(summary.line(), "0");
    }
}
