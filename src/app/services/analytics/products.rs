//! Product rankings

use super::OrderedGroups;
use super::revenue::record_figures;
use crate::app::models::{EnrichedRecord, NumericValue};
use crate::app::services::record_parser::field_normalizer::non_blank;
use crate::config::ProductRanking;
use crate::constants::columns;

/// Aggregates for one product name
#[derive(Debug, Clone, PartialEq)]
pub struct ProductStats {
    pub name: String,
    pub quantity: NumericValue,
    pub revenue: f64,
}

/// Per-product totals in first-seen order
pub fn product_rollup(records: &[EnrichedRecord]) -> Vec<ProductStats> {
    let mut groups = OrderedGroups::new();

    for record in records {
        let Some(name) = non_blank(record.get(columns::PRODUCT_NAME)) else {
            continue;
        };
        let Some(figures) = record_figures(record) else {
            continue;
        };

        let stats = groups.entry(name, || ProductStats {
            name: name.to_string(),
            quantity: NumericValue::zero(),
            revenue: 0.0,
        });
        stats.quantity = stats.quantity + figures.quantity;
        stats.revenue += figures.revenue;
    }

    groups.into_vec()
}

/// The `n` best products under `ranking`, ties in first-seen order
pub fn top_products(
    records: &[EnrichedRecord],
    n: usize,
    ranking: ProductRanking,
) -> Vec<ProductStats> {
    let mut products = product_rollup(records);

    match ranking {
        ProductRanking::Revenue => products.sort_by(|a, b| b.revenue.total_cmp(&a.revenue)),
        ProductRanking::Quantity => {
            products.sort_by(|a, b| b.quantity.as_f64().total_cmp(&a.quantity.as_f64()))
        }
    }

    products.truncate(n);
    products
}

/// Products selling fewer than `threshold` units, fewest first
pub fn low_performers(records: &[EnrichedRecord], threshold: i64) -> Vec<ProductStats> {
    let mut products: Vec<ProductStats> = product_rollup(records)
        .into_iter()
        .filter(|product| product.quantity.as_f64() < threshold as f64)
        .collect();

    products.sort_by(|a, b| a.quantity.as_f64().total_cmp(&b.quantity.as_f64()));
    products
}
