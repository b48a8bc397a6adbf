//! Tests for report rendering


use crate::app::models::RawRecord;
use crate::app::services::product_catalog::StaticCatalog;
use crate::app::services::record_processor::{ProcessingResult, RecordProcessor};
use crate::config::KeyStrategy;
use chrono::NaiveDate;
use std::sync::Arc;

/// Build a raw record from a pipe-delimited line in the standard column order
pub fn raw_line(line_number: usize, line: &str) -> RawRecord {
    let header = [
        "TransactionID",
        "Date",
        "ProductID",
        "ProductName",
        "Quantity",
        "UnitPrice",
        "CustomerID",
        "Region",
    ];
    RawRecord::from_pairs(line_number, header.into_iter().zip(line.split('|')))
}

/// Run lines through the processor with the built-in catalog
pub fn process_lines(lines: &[&str]) -> ProcessingResult {
    let records = lines
        .iter()
        .enumerate()
        .map(|(index, line)| raw_line(index + 2, line))
        .collect();
    RecordProcessor::new(Arc::new(StaticCatalog::builtin()), KeyStrategy::Verbatim)
        .process_records(records, false)
}

/// Fixed report timestamp
pub fn generated_at() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 12, 31)
        .and_then(|date| date.and_hms_opt(9, 30, 0))
        .unwrap()
}
