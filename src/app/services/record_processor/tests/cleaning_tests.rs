//! Tests for record cleaning

use super::*;
use crate::app::services::record_processor::clean_record;

#[test]
fn test_clean_record_canonical_fields() {
    let record = create_test_record(2, "T001", "P101", "1,200", "1,234.50");
    let cleaned = clean_record(record);

    assert_eq!(cleaned.get("ProductName"), Some("Widget  Large"));
    assert_eq!(cleaned.get("Quantity"), Some("1200"));
    assert_eq!(cleaned.get("UnitPrice"), Some("1234.5"));
    assert_eq!(cleaned.get("CustomerID"), Some("C001"));
    assert_eq!(cleaned.line_number(), 2);
}

#[test]
fn test_integral_float_keeps_float_form() {
    let cleaned = clean_record(create_test_record(2, "T001", "P101", "2", "10.00"));
    assert_eq!(cleaned.get("UnitPrice"), Some("10.0"));
}

#[test]
fn test_clean_record_is_idempotent() {
    let once = clean_record(create_test_record(2, "T001", "P101", "3", "45,000.75"));
    let twice = clean_record(once.clone().into_raw());

    assert_eq!(once, twice);
}

#[test]
fn test_absent_fields_stay_absent() {
    let record = RawRecord::from_pairs(2, [("TransactionID", "T001"), ("Quantity", "5")]);
    let cleaned = clean_record(record);

    assert_eq!(cleaned.get("Quantity"), Some("5"));
    assert_eq!(cleaned.get("UnitPrice"), None);
    assert_eq!(cleaned.get("ProductName"), None);
}

#[test]
fn test_large_integral_float_survives_cleaning() {
    use crate::app::models::{EnrichedRecord, ValidationOutcome};
    use crate::app::services::analytics::total_revenue;
    use crate::app::services::record_processor::validate_record;

    let record = create_test_record(2, "T001", "P101", "100000000000000000000.0", "1.00");
    let ValidationOutcome::Valid(once) = validate_record(record) else {
        panic!("record should be valid");
    };
    let twice = clean_record(once.clone().into_raw());

    assert_eq!(once.get("Quantity"), Some("100000000000000000000.0"));
    assert_eq!(once, twice);

    let revenue = total_revenue(&[EnrichedRecord::unmatched(twice)]);
    assert_eq!(revenue, 1e20);
}
