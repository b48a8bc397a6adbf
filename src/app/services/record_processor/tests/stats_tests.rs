//! Tests for processing statistics

use crate::app::services::record_processor::{ProcessingResult, ProcessingStats};

#[test]
fn test_empty_stats_rates() {
    let stats = ProcessingStats::new();
    assert_eq!(stats.success_rate(), 100.0);
    assert_eq!(stats.enrichment_rate(), 0.0);
    assert!(stats.fully_enriched());
}

#[test]
fn test_rates_and_summary() {
    let mut stats = ProcessingStats {
        total_input: 10,
        valid: 8,
        invalid: 2,
        matched: 6,
        unmatched: 2,
        ..ProcessingStats::default()
    };
    stats.add_error("lookup failed".to_string());

    assert_eq!(stats.success_rate(), 80.0);
    assert_eq!(stats.enrichment_rate(), 75.0);
    assert!(!stats.fully_enriched());
    assert_eq!(stats.errors, 1);

    let summary = stats.summary();
    assert!(summary.contains("10 records -> 8 valid, 2 invalid"));
    assert!(summary.contains("Enriched: 6/8"));
    assert!(summary.contains("Lookup errors: 1"));

    let result = ProcessingResult::new(Vec::new(), Vec::new(), stats);
    assert_eq!(result.record_count(), 0);
    assert_eq!(result.success_rate(), 80.0);
}
