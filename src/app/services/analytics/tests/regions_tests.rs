//! Tests for the region rollup

use super::*;
use crate::app::models::NumericValue;
use crate::app::services::analytics::region_rollup;

#[test]
fn test_single_region_owns_all_revenue() {
    let records = vec![create_sale(
        "T001", "2024-01-01", "Widget", "2", "10.00", "C1", "North",
    )];
    let regions = region_rollup(&records);

    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].region, "North");
    assert_close(regions[0].revenue, 20.0);
    assert_close(regions[0].percentage, 100.0);
    assert_close(regions[0].average_transaction_value, 20.0);
}

#[test]
fn test_regions_sorted_by_revenue() {
    let regions = region_rollup(&create_sample_sales());
    let names: Vec<&str> = regions.iter().map(|r| r.region.as_str()).collect();

    assert_eq!(names, vec!["North", "South", "East"]);

    let north = &regions[0];
    assert_eq!(north.transaction_count, 2);
    assert_eq!(north.quantity, NumericValue::Integer(5));
    assert_close(north.revenue, 94_501.5);
    assert_close(north.average_transaction_value, 47_250.75);
}

#[test]
fn test_percentages_sum_to_hundred() {
    let regions = region_rollup(&create_sample_sales());
    let sum: f64 = regions.iter().map(|r| r.percentage).sum();

    assert!((sum - 100.0).abs() < 0.05, "percentages summed to {sum}");
}

#[test]
fn test_equal_revenue_keeps_first_seen_order() {
    let records = vec![
        create_sale("T001", "2024-01-01", "A", "1", "10", "C1", "West"),
        create_sale("T002", "2024-01-01", "A", "1", "10", "C2", "East"),
    ];
    let regions = region_rollup(&records);

    assert_eq!(regions[0].region, "West");
    assert_eq!(regions[1].region, "East");
    assert_close(regions[0].percentage, 50.0);
}

#[test]
fn test_blank_region_skipped_from_rollup_only() {
    let mut records = create_sample_sales();
    records.push(create_sale("T006", "2024-12-04", "Mouse", "1", "500", "C004", " "));

    let regions = region_rollup(&records);
    assert_eq!(regions.len(), 3);

    let sum: f64 = regions.iter().map(|r| r.percentage).sum();
    assert!(sum < 100.0);
}

#[test]
fn test_empty_input_has_no_regions() {
    assert!(region_rollup(&[]).is_empty());
}
