//! Field normalization utilities for transaction records
//!
//! Numeric fields may carry thousands separators (`1,234.50`) and product
//! names may carry embedded commas. Two numeric entry points exist:
//! [`clean_numeric_field`] degrades malformed input to zero and is used while
//! validating, [`parse_numeric_field`] reports malformed input as `None` and is
//! used once records have been validated.

use crate::app::models::NumericValue;

/// Parse a numeric field, returning `None` for absent, empty or malformed input
///
/// Commas are stripped first. Values containing a decimal point parse as
/// floating point, everything else as an integer.
pub fn parse_numeric_field(raw: Option<&str>) -> Option<NumericValue> {
    let stripped = raw?.replace(',', "");
    let trimmed = stripped.trim();

    if trimmed.is_empty() {
        return None;
    }

    if trimmed.contains('.') {
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(NumericValue::Float)
    } else {
        trimmed.parse::<i64>().ok().map(NumericValue::Integer)
    }
}

/// Parse a numeric field, degrading absent or malformed input to zero
pub fn clean_numeric_field(raw: Option<&str>) -> NumericValue {
    parse_numeric_field(raw).unwrap_or_default()
}

/// Replace embedded commas with spaces; absent input stays absent
pub fn clean_text_field(raw: Option<&str>) -> Option<String> {
    raw.map(|value| value.replace(',', " "))
}

/// Trimmed field value, or `None` when absent or blank
pub fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}
