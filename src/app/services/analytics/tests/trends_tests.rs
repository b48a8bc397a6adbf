//! Tests for the daily trend and peak day

use super::*;
use crate::app::services::analytics::{daily_trend, peak_day};

#[test]
fn test_daily_trend_ascending_dates() {
    let trend = daily_trend(&create_sample_sales());
    let dates: Vec<&str> = trend.iter().map(|d| d.date.as_str()).collect();

    assert_eq!(dates, vec!["2024-12-01", "2024-12-02", "2024-12-03"]);

    let first = &trend[0];
    assert_close(first.revenue, 95_000.0);
    assert_eq!(first.transaction_count, 2);
    assert_eq!(first.unique_customers, 2);
}

#[test]
fn test_unique_customers_per_day() {
    let records = vec![
        create_sale("T001", "2024-01-01", "A", "1", "10", "C1", "North"),
        create_sale("T002", "2024-01-01", "B", "1", "10", "C1", "North"),
        create_sale("T003", "2024-01-01", "C", "1", "10", "C2", "North"),
    ];
    let trend = daily_trend(&records);

    assert_eq!(trend.len(), 1);
    assert_eq!(trend[0].transaction_count, 3);
    assert_eq!(trend[0].unique_customers, 2);
}

#[test]
fn test_peak_day() {
    let peak = peak_day(&create_sample_sales()).unwrap();

    assert_eq!(peak.date, "2024-12-01");
    assert_close(peak.revenue, 95_000.0);
    assert_eq!(peak.transaction_count, 2);
}

#[test]
fn test_peak_day_tie_goes_to_earliest_date() {
    // Later date appears first in the input
    let records = vec![
        create_sale("T001", "2024-03-05", "A", "1", "100", "C1", "North"),
        create_sale("T002", "2024-03-01", "B", "2", "50", "C2", "North"),
    ];

    assert_eq!(peak_day(&records).unwrap().date, "2024-03-01");
}

#[test]
fn test_no_peak_day_without_records() {
    assert!(peak_day(&[]).is_none());
}
