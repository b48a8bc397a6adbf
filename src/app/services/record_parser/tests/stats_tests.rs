//! Tests for parsing statistics functionality

use super::super::stats::{ParseResult, ParseStats};

#[test]
fn test_parse_stats_completeness() {
    let stats = ParseStats {
        total_lines: 12,
        records_parsed: 10,
        blank_lines_skipped: 2,
        short_records: 1,
        long_records: 0,
    };

    assert_eq!(stats.completeness_rate(), 90.0);
    assert_eq!(
        stats.summary(),
        "10 records from 12 lines (2 blank skipped, 1 short, 0 long)"
    );
}

#[test]
fn test_parse_stats_empty() {
    let stats = ParseStats::new();

    assert_eq!(stats.total_lines, 0);
    assert_eq!(stats.records_parsed, 0);
    assert_eq!(stats.completeness_rate(), 0.0);
}

#[test]
fn test_empty_parse_result() {
    let result = ParseResult::empty();
    assert!(result.records.is_empty());
    assert!(result.header.is_empty());
    assert_eq!(result.stats, ParseStats::default());
}
