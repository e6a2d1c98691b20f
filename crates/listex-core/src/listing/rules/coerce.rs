//! Numeric coercion for heterogeneous record fields.

use serde_json::Value;

/// Coerce a raw field value into a number.
///
/// Listing dumps encode quantities in several ways: plain JSON numbers,
/// grouped strings (`"1,234"`), currency strings (`"$250,000"`), strings
/// with a unit suffix (`"50 sqft"`). Numbers pass through unchanged; other
/// values are rendered as text and cleaned down to digits, `.` and `-`
/// (relative order preserved) before a standard decimal parse. Anything
/// that does not survive that - null, empty, malformed like `"1.2.3"` -
/// comes back as `None`. Coercion never fails with an error.
pub fn coerce_number(value: &Value) -> Option<f64> {
    if let Value::Number(n) = value {
        return n.as_f64();
    }

    let text = value_text(value)?;
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok()
}

/// Render a JSON value the way it reads as text in a listing dump.
///
/// Nulls and objects have no text form. Array elements are joined with
/// commas, null elements rendering empty.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Object(_) => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|v| value_text(v).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_plain_numbers() {
        assert_eq!(coerce_number(&json!(42)), Some(42.0));
        assert_eq!(coerce_number(&json!(12.5)), Some(12.5));
        assert_eq!(coerce_number(&json!(-3)), Some(-3.0));
    }

    #[test]
    fn test_coerce_formatted_strings() {
        assert_eq!(coerce_number(&json!("1,234")), Some(1234.0));
        assert_eq!(coerce_number(&json!("$250,000")), Some(250000.0));
        assert_eq!(coerce_number(&json!("1 500 000")), Some(1500000.0));
        assert_eq!(coerce_number(&json!("50 sqft")), Some(50.0));
        assert_eq!(coerce_number(&json!("80 m²")), Some(80.0));
        assert_eq!(coerce_number(&json!("-12.5")), Some(-12.5));
        assert_eq!(coerce_number(&json!(".5")), Some(0.5));
    }

    #[test]
    fn test_coerce_invalid_yields_none() {
        assert_eq!(coerce_number(&Value::Null), None);
        assert_eq!(coerce_number(&json!("abc")), None);
        assert_eq!(coerce_number(&json!("")), None);
        assert_eq!(coerce_number(&json!("   ")), None);
        assert_eq!(coerce_number(&json!("1.2.3")), None);
        assert_eq!(coerce_number(&json!("--5")), None);
        assert_eq!(coerce_number(&json!(true)), None);
        assert_eq!(coerce_number(&json!({"nested": 1})), None);
    }

    #[test]
    fn test_coerce_single_element_array() {
        assert_eq!(coerce_number(&json!(["1,500"])), Some(1500.0));
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&json!("flat")), Some("flat".to_string()));
        assert_eq!(value_text(&json!(false)), Some("false".to_string()));
        assert_eq!(value_text(&json!(7)), Some("7".to_string()));
        assert_eq!(value_text(&Value::Null), None);
        assert_eq!(value_text(&json!({})), None);
        assert_eq!(
            value_text(&json!([1, null, 2])),
            Some("1,,2".to_string())
        );
    }
}
