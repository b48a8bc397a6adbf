//! Test utilities for the transaction file parser
//!
//! This module provides sample file content and helpers shared by the
//! parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

// Test modules
mod normalizer_tests;
mod parser_tests;
mod stats_tests;

/// Standard header line of the transaction file format
pub const HEADER: &str =
    "TransactionID|Date|ProductID|ProductName|Quantity|UnitPrice|CustomerID|Region";

/// Helper to create a small but realistic transaction file body
pub fn create_test_sales_content() -> String {
    format!(
        "{HEADER}
T001|2024-12-01|P101|Laptop Premium|2|45,000|C001|North
T002|2024-12-01|P102|Wireless Mouse|5|599.50|C002|South

T003|2024-12-02|P103|Mechanical Keyboard, RGB|1|2,499.00|C003|East
X004|2024-12-02|P104|LED Monitor|1|12000|C004|West
"
    )
}

/// Helper to create a temporary file with given bytes
pub fn create_temp_file(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
