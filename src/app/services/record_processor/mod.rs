//! Record processing pipeline for parsed sales transactions
//!
//! Takes [`RawRecord`]s from the parser and runs them through three stages,
//! collecting statistics along the way.
//!
//! # Architecture
//!
//! - [`validation`] - Ordered rule set classifying records as valid or invalid
//! - [`cleaning`] - Canonical form for validated records
//! - [`enrichment`] - Product catalog lookups merged into records
//! - [`processor`] - RecordProcessor and pipeline orchestration
//! - [`stats`] - Processing statistics and result structures
//!
//! # Processing Pipeline
//!
//! 1. **Validation**: each record yields exactly one outcome; invalid records
//!    carry the first rule they violated and are kept for reporting
//! 2. **Cleaning**: product names lose embedded commas and numeric fields are
//!    rewritten in canonical form
//! 3. **Enrichment**: catalog metadata is attached; misses and lookup errors
//!    produce the `Unknown` sentinel and never abort the batch
//!
//! # Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use sales_analytics::RawRecord;
//! use sales_analytics::app::services::product_catalog::StaticCatalog;
//! use sales_analytics::app::services::record_processor::RecordProcessor;
//! use sales_analytics::config::KeyStrategy;
//!
//! let record = RawRecord::from_pairs(2, [
//!     ("TransactionID", "T001"),
//!     ("ProductID", "P101"),
//!     ("ProductName", "Laptop, 15in"),
//!     ("Quantity", "2"),
//!     ("UnitPrice", "45,000"),
//!     ("CustomerID", "C001"),
//!     ("Region", "North"),
//! ]);
//!
//! let processor = RecordProcessor::new(Arc::new(StaticCatalog::builtin()), KeyStrategy::Verbatim);
//! let result = processor.process_records(vec![record], false);
//!
//! assert_eq!(result.records.len(), 1);
//! assert_eq!(result.records[0].get("UnitPrice"), Some("45000"));
//! assert!(result.records[0].api_match);
//! ```
//!
//! [`RawRecord`]: crate::app::models::RawRecord

pub mod cleaning;
pub mod enrichment;
pub mod processor;
pub mod stats;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use processor::RecordProcessor;
pub use stats::{ProcessingResult, ProcessingStats};

// Re-export stage functions for callers running a single stage
pub use cleaning::clean_record;
pub use enrichment::{enrich_record, enrich_records, lookup_product, try_enrich_record};
pub use validation::{ValidationSummary, partition_records, validate_record};
