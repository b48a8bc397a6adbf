//! Product metadata enrichment for cleaned records
//!
//! Looks each record's product up in the catalog and attaches the result.
//! A record ends up unmatched, carrying the `Unknown` sentinel, when:
//! - no key can be derived from its `ProductID`
//! - the catalog has no entry for the key
//! - the lookup fails

use crate::{Error, Result};
use crate::app::models::{CleanedRecord, EnrichedRecord, ProductInfo};
use crate::app::services::product_catalog::{ProductCatalog, derive_key};
use crate::config::KeyStrategy;
use crate::constants::columns;
use indicatif::ProgressBar;
use tracing::debug;

use super::stats::ProcessingStats;

/// Look up the catalog entry for a record
///
/// `Ok(None)` covers both an underivable key and a catalog miss.
pub fn lookup_product(
    record: &CleanedRecord,
    catalog: &dyn ProductCatalog,
    strategy: KeyStrategy,
) -> Result<Option<ProductInfo>> {
    match derive_key(record.get(columns::PRODUCT_ID), strategy) {
        Some(key) => catalog.lookup(&key),
        None => Ok(None),
    }
}

/// Enrich a single record, handing back the lookup error if there was one
///
/// The record is always returned; a failed lookup leaves it unmatched.
pub fn try_enrich_record(
    record: CleanedRecord,
    catalog: &dyn ProductCatalog,
    strategy: KeyStrategy,
) -> (EnrichedRecord, Option<Error>) {
    match lookup_product(&record, catalog, strategy) {
        Ok(Some(product)) => (EnrichedRecord::matched(record, product), None),
        Ok(None) => (EnrichedRecord::unmatched(record), None),
        Err(e) => {
            debug!("Lookup failed for line {}: {}", record.line_number(), e);
            (EnrichedRecord::unmatched(record), Some(e))
        }
    }
}

/// Enrich a single record, treating lookup errors as misses
pub fn enrich_record(
    record: CleanedRecord,
    catalog: &dyn ProductCatalog,
    strategy: KeyStrategy,
) -> EnrichedRecord {
    try_enrich_record(record, catalog, strategy).0
}

/// Enrich every record, counting matches and lookup errors in `stats`
pub fn enrich_records(
    records: Vec<CleanedRecord>,
    catalog: &dyn ProductCatalog,
    strategy: KeyStrategy,
    stats: &mut ProcessingStats,
    progress: Option<&ProgressBar>,
) -> Vec<EnrichedRecord> {
    let mut enriched = Vec::with_capacity(records.len());

    for record in records {
        let (result, error) = try_enrich_record(record, catalog, strategy);

        if let Some(e) = error {
            stats.add_error(format!(
                "Catalog lookup failed for product {} on line {}: {}",
                result.get(columns::PRODUCT_ID).unwrap_or("N/A"),
                result.record.line_number(),
                e
            ));
        }

        if result.api_match {
            stats.matched += 1;
        } else {
            stats.unmatched += 1;
        }
        enriched.push(result);

        if let Some(pb) = progress {
            pb.inc(1);
        }
    }

    debug!(
        "Enrichment: {} matched, {} unmatched, {} lookup errors",
        stats.matched, stats.unmatched, stats.errors
    );

    enriched
}
