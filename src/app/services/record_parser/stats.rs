//! Parsing statistics and result structures for transaction files
//!
//! This module provides types for tracking how many lines were turned into
//! records and organizing parsed results for downstream processing.

use crate::app::models::RawRecord;

/// Parsing result with records and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Column names declared by the header line, in file order
    pub header: Vec<String>,

    /// Parsed records in file order
    pub records: Vec<RawRecord>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

impl ParseResult {
    /// Result for input without a header line
    pub fn empty() -> Self {
        Self {
            header: Vec::new(),
            records: Vec::new(),
            stats: ParseStats::new(),
        }
    }
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of lines after the header, blank ones included
    pub total_lines: usize,

    /// Number of records produced
    pub records_parsed: usize,

    /// Number of all-whitespace lines skipped
    pub blank_lines_skipped: usize,

    /// Number of records with fewer fields than the header
    pub short_records: usize,

    /// Number of lines with more fields than the header
    pub long_records: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage of records that carried every header column
    pub fn completeness_rate(&self) -> f64 {
        if self.records_parsed == 0 {
            0.0
        } else {
            ((self.records_parsed - self.short_records) as f64 / self.records_parsed as f64)
                * 100.0
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} records from {} lines ({} blank skipped, {} short, {} long)",
            self.records_parsed,
            self.total_lines,
            self.blank_lines_skipped,
            self.short_records,
            self.long_records
        )
    }
}
