//! Pipe-delimited transaction file parser
//!
//! This module turns the raw lines of a transaction file into [`RawRecord`]s
//! and provides the field normalizers shared by validation, cleaning and
//! aggregation.
//!
//! ## Architecture
//!
//! - [`parser`] - Header handling and line-to-record zipping
//! - [`field_normalizer`] - Numeric and text field normalization
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use sales_analytics::app::services::record_parser::RecordParser;
//!
//! let lines = [
//!     "TransactionID|Date|ProductID|ProductName|Quantity|UnitPrice|CustomerID|Region",
//!     "T001|2024-01-01|P101|Widget|2|10.00|C1|North",
//! ];
//! let result = RecordParser::new().parse_lines(&lines);
//!
//! assert_eq!(result.records.len(), 1);
//! assert_eq!(result.records[0].get("Region"), Some("North"));
//! ```
//!
//! [`RawRecord`]: crate::app::models::RawRecord

pub mod field_normalizer;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use field_normalizer::{clean_numeric_field, clean_text_field, parse_numeric_field};
pub use parser::RecordParser;
pub use stats::{ParseResult, ParseStats};
