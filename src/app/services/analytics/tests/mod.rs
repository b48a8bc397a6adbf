//! Tests for the aggregation engine
//!
//! Records are built through the cleaner so numeric fields carry the same
//! canonical text they have in a real run.

pub mod customers_tests;
pub mod regions_tests;
pub mod trends_tests;

use crate::app::models::{EnrichedRecord, RawRecord};
use crate::app::services::record_processor::clean_record;

/// Create an unmatched enriched record from the fields that drive analytics
pub fn create_sale(
    transaction_id: &str,
    date: &str,
    product: &str,
    quantity: &str,
    unit_price: &str,
    customer: &str,
    region: &str,
) -> EnrichedRecord {
    let raw = RawRecord::from_pairs(
        2,
        [
            ("TransactionID", transaction_id),
            ("Date", date),
            ("ProductID", "P999"),
            ("ProductName", product),
            ("Quantity", quantity),
            ("UnitPrice", unit_price),
            ("CustomerID", customer),
            ("Region", region),
        ],
    );
    EnrichedRecord::unmatched(clean_record(raw))
}

/// Small multi-region, multi-day batch
pub fn create_sample_sales() -> Vec<EnrichedRecord> {
    vec![
        create_sale("T001", "2024-12-01", "Laptop", "2", "45,000", "C001", "North"),
        create_sale("T002", "2024-12-01", "Mouse", "10", "500", "C002", "South"),
        create_sale("T003", "2024-12-02", "Keyboard", "3", "1,500.50", "C001", "North"),
        create_sale("T004", "2024-12-03", "Mouse", "4", "500", "C003", "East"),
        create_sale("T005", "2024-12-02", "Cable", "1", "199", "C002", "South"),
    ]
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
