//! Aggregation engine for enriched sales records
//!
//! Every view is an independent fold over a slice of [`EnrichedRecord`]s.
//! Quantity and unit price are re-derived through the strict normalizer; a
//! record whose figures do not parse is left out of every revenue-bearing view.
//! Records missing a view's grouping field are left out of that view only.
//!
//! # Views
//!
//! - [`revenue`] - Total revenue and the overall summary
//! - [`regions`] - Revenue rollup per region
//! - [`products`] - Top-N ranking and low performers
//! - [`customers`] - Spend and product mix per customer
//! - [`trends`] - Daily trend and peak day
//! - [`enrichment_summary`] - Catalog match rates
//! - [`report`] - All views computed together
//!
//! [`EnrichedRecord`]: crate::app::models::EnrichedRecord

pub mod customers;
pub mod enrichment_summary;
pub mod products;
pub mod regions;
pub mod report;
pub mod revenue;
pub mod trends;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use customers::{CustomerStats, customer_analysis};
pub use enrichment_summary::{EnrichmentSummary, enrichment_summary};
pub use products::{ProductStats, low_performers, product_rollup, top_products};
pub use regions::{RegionStats, region_rollup};
pub use report::AnalyticsReport;
pub use revenue::{
    DateRange, OverallSummary, RecordFigures, overall_summary, record_figures, record_revenue,
    round_to_cents, total_revenue,
};
pub use trends::{DailyStats, PeakDay, daily_trend, peak_day, peak_of};

use std::collections::HashMap;

/// Accumulators keyed by name, kept in first-seen order
///
/// Stable sorts over the resulting vector break ties by encounter order.
#[derive(Debug)]
pub(crate) struct OrderedGroups<A> {
    index: HashMap<String, usize>,
    groups: Vec<A>,
}

impl<A> OrderedGroups<A> {
    pub(crate) fn new() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }

    /// Accumulator for `key`, created with `init` on first sight
    pub(crate) fn entry(&mut self, key: &str, init: impl FnOnce() -> A) -> &mut A {
        let position = match self.index.get(key) {
            Some(&position) => position,
            None => {
                self.groups.push(init());
                self.index.insert(key.to_string(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        &mut self.groups[position]
    }

    pub(crate) fn into_vec(self) -> Vec<A> {
        self.groups
    }
}
