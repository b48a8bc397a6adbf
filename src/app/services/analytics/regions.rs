//! Revenue rollup per region

use super::OrderedGroups;
use super::revenue::{record_figures, revenue_sum, round_to_cents};
use crate::app::models::{EnrichedRecord, NumericValue};
use crate::app::services::record_parser::field_normalizer::non_blank;
use crate::constants::columns;

/// Aggregates for one region
#[derive(Debug, Clone, PartialEq)]
pub struct RegionStats {
    pub region: String,
    pub revenue: f64,
    pub transaction_count: usize,
    pub quantity: NumericValue,
    /// Share of total revenue, rounded to two places
    pub percentage: f64,
    pub average_transaction_value: f64,
}

/// Roll records up by region, highest revenue first
///
/// Regions with equal revenue keep the order they were first seen in.
pub fn region_rollup(records: &[EnrichedRecord]) -> Vec<RegionStats> {
    let total = revenue_sum(records);
    let mut groups = OrderedGroups::new();

    for record in records {
        let Some(region) = non_blank(record.get(columns::REGION)) else {
            continue;
        };
        let Some(figures) = record_figures(record) else {
            continue;
        };

        let stats = groups.entry(region, || RegionStats {
            region: region.to_string(),
            revenue: 0.0,
            transaction_count: 0,
            quantity: NumericValue::zero(),
            percentage: 0.0,
            average_transaction_value: 0.0,
        });
        stats.revenue += figures.revenue;
        stats.transaction_count += 1;
        stats.quantity = stats.quantity + figures.quantity;
    }

    let mut regions = groups.into_vec();
    for stats in &mut regions {
        stats.percentage = if total > 0.0 {
            round_to_cents(stats.revenue / total * 100.0)
        } else {
            0.0
        };
        stats.average_transaction_value = stats.revenue / stats.transaction_count as f64;
    }

    regions.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    regions
}
