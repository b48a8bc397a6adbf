//! Catalog match summary

use crate::app::models::EnrichedRecord;
use crate::constants::columns;

/// How many records the catalog matched
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentSummary {
    pub total: usize,
    pub matched: usize,
    pub unmatched: usize,
    /// Matched share as a percentage, zero for an empty batch
    pub success_rate: f64,
    /// Distinct unmatched product ids in first-seen order
    pub unmatched_product_ids: Vec<String>,
}

pub fn enrichment_summary(records: &[EnrichedRecord]) -> EnrichmentSummary {
    let total = records.len();
    let matched = records.iter().filter(|record| record.api_match).count();

    let mut unmatched_product_ids: Vec<String> = Vec::new();
    for record in records.iter().filter(|record| !record.api_match) {
        let product_id = record.get(columns::PRODUCT_ID).unwrap_or("N/A");
        if !unmatched_product_ids.iter().any(|seen| seen == product_id) {
            unmatched_product_ids.push(product_id.to_string());
        }
    }

    EnrichmentSummary {
        total,
        matched,
        unmatched: total - matched,
        success_rate: if total == 0 {
            0.0
        } else {
            matched as f64 / total as f64 * 100.0
        },
        unmatched_product_ids,
    }
}
