//! Customer spend analysis

use super::OrderedGroups;
use super::revenue::record_revenue;
use crate::app::models::EnrichedRecord;
use crate::app::services::record_parser::field_normalizer::non_blank;
use crate::constants::columns;
use std::collections::BTreeSet;

/// Aggregates for one customer
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerStats {
    pub customer_id: String,
    pub total_spent: f64,
    pub purchase_count: usize,
    pub average_order_value: f64,
    /// Distinct product names, sorted
    pub products: Vec<String>,
}

/// Per-customer spend, biggest spender first
pub fn customer_analysis(records: &[EnrichedRecord]) -> Vec<CustomerStats> {
    let mut groups = OrderedGroups::new();

    for record in records {
        let Some(customer_id) = non_blank(record.get(columns::CUSTOMER_ID)) else {
            continue;
        };
        let Some(revenue) = record_revenue(record) else {
            continue;
        };

        let (stats, products) = groups.entry(customer_id, || {
            (
                CustomerStats {
                    customer_id: customer_id.to_string(),
                    total_spent: 0.0,
                    purchase_count: 0,
                    average_order_value: 0.0,
                    products: Vec::new(),
                },
                BTreeSet::new(),
            )
        });
        stats.total_spent += revenue;
        stats.purchase_count += 1;
        if let Some(name) = non_blank(record.get(columns::PRODUCT_NAME)) {
            products.insert(name.to_string());
        }
    }

    let mut customers: Vec<CustomerStats> = groups
        .into_vec()
        .into_iter()
        .map(|(mut stats, products)| {
            stats.average_order_value = if stats.purchase_count == 0 {
                0.0
            } else {
                stats.total_spent / stats.purchase_count as f64
            };
            stats.products = products.into_iter().collect();
            stats
        })
        .collect();

    customers.sort_by(|a, b| b.total_spent.total_cmp(&a.total_spent));
    customers
}
