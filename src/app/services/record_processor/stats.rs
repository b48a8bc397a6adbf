//! Processing statistics and result structures for the record pipeline

use crate::app::models::{EnrichedRecord, InvalidRecord};

/// Statistics for record processing operations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessingStats {
    /// Total number of parsed input records
    pub total_input: usize,
    /// Records passing validation
    pub valid: usize,
    /// Records rejected by validation
    pub invalid: usize,
    /// Valid records the catalog returned an entry for
    pub matched: usize,
    /// Valid records left with the `Unknown` sentinel
    pub unmatched: usize,
    /// Catalog lookup errors (each also counted as unmatched)
    pub errors: usize,
    /// Lookup error messages for debugging
    pub error_messages: Vec<String>,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a lookup error to the statistics
    pub fn add_error(&mut self, message: String) {
        self.errors += 1;
        self.error_messages.push(message);
    }

    /// Percentage of input records that passed validation
    pub fn success_rate(&self) -> f64 {
        if self.total_input == 0 {
            100.0
        } else {
            (self.valid as f64 / self.total_input as f64) * 100.0
        }
    }

    /// Percentage of valid records matched in the catalog
    pub fn enrichment_rate(&self) -> f64 {
        if self.valid == 0 {
            0.0
        } else {
            (self.matched as f64 / self.valid as f64) * 100.0
        }
    }

    /// True when every valid record was matched and no lookup failed
    pub fn fully_enriched(&self) -> bool {
        self.unmatched == 0 && self.errors == 0
    }

    pub fn summary(&self) -> String {
        format!(
            "Processing Summary: {} records -> {} valid, {} invalid ({:.1}% valid) | \
             Enriched: {}/{} ({:.1}%) | Lookup errors: {}",
            self.total_input,
            self.valid,
            self.invalid,
            self.success_rate(),
            self.matched,
            self.valid,
            self.enrichment_rate(),
            self.errors
        )
    }
}

/// Result of running records through the processing pipeline
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// Valid records, cleaned and enriched, in input order
    pub records: Vec<EnrichedRecord>,
    /// Rejected records with their reason, in input order
    pub invalid: Vec<InvalidRecord>,
    pub stats: ProcessingStats,
}

impl ProcessingResult {
    pub fn new(
        records: Vec<EnrichedRecord>,
        invalid: Vec<InvalidRecord>,
        stats: ProcessingStats,
    ) -> Self {
        Self {
            records,
            invalid,
            stats,
        }
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid.len()
    }

    pub fn success_rate(&self) -> f64 {
        self.stats.success_rate()
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        self.stats.summary()
    }
}
