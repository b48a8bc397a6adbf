//! Main record processor implementation and pipeline orchestration

use crate::app::models::RawRecord;
use crate::app::services::product_catalog::ProductCatalog;
use crate::config::KeyStrategy;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use tracing::{debug, info};

use super::{
    enrichment::enrich_records,
    stats::{ProcessingResult, ProcessingStats},
    validation::partition_records,
};

/// Record processor for parsed sales transactions
///
/// Runs validation, cleaning and enrichment over a batch of raw records. The
/// processor never fails: rejected records and catalog problems are reported
/// through the [`ProcessingResult`].
#[derive(Debug, Clone)]
pub struct RecordProcessor {
    /// Catalog backing the enrichment stage
    catalog: Arc<dyn ProductCatalog>,
    /// How catalog keys are derived from `ProductID`
    key_strategy: KeyStrategy,
}

impl RecordProcessor {
    pub fn new(catalog: Arc<dyn ProductCatalog>, key_strategy: KeyStrategy) -> Self {
        Self {
            catalog,
            key_strategy,
        }
    }

    /// Process raw records through validation, cleaning and enrichment
    ///
    /// Valid and invalid records keep their input order and together account
    /// for every input record.
    pub fn process_records(&self, records: Vec<RawRecord>, show_progress: bool) -> ProcessingResult {
        let mut stats = ProcessingStats::new();
        stats.total_input = records.len();

        info!(
            "Starting record processing pipeline for {} records",
            records.len()
        );

        // Step 1: Validate and clean
        let (valid, invalid) = partition_records(records);
        stats.valid = valid.len();
        stats.invalid = invalid.len();

        debug!(
            "Validation: {} valid, {} invalid",
            stats.valid, stats.invalid
        );

        // Step 2: Enrich with catalog metadata
        let enrichment_pb = if show_progress {
            Some(Self::create_processing_progress_bar(
                valid.len() as u64,
                "Product enrichment",
            ))
        } else {
            None
        };

        let enriched = enrich_records(
            valid,
            self.catalog.as_ref(),
            self.key_strategy,
            &mut stats,
            enrichment_pb.as_ref(),
        );

        if let Some(pb) = enrichment_pb {
            pb.finish_with_message(format!(
                "Product enrichment complete: {}/{} matched",
                stats.matched,
                enriched.len()
            ));
        }

        info!("{}", stats.summary());

        if stats.errors > 0 {
            // Debug level keeps the progress bars readable
            debug!(
                "{} catalog lookups failed; affected records are marked unmatched",
                stats.errors
            );
        }

        ProcessingResult::new(enriched, invalid, stats)
    }

    /// Catalog used by this processor
    pub fn catalog(&self) -> &dyn ProductCatalog {
        self.catalog.as_ref()
    }

    pub fn key_strategy(&self) -> KeyStrategy {
        self.key_strategy
    }

    /// Create a progress bar for processing operations
    fn create_processing_progress_bar(total: u64, operation: &str) -> ProgressBar {
        let pb = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        pb.set_style(style);
        pb.set_message(operation.to_string());
        pb
    }
}
