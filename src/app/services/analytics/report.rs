//! All analytics views computed in one pass over the configuration

use super::customers::{CustomerStats, customer_analysis};
use super::enrichment_summary::{EnrichmentSummary, enrichment_summary};
use super::products::{ProductStats, low_performers, top_products};
use super::regions::{RegionStats, region_rollup};
use super::revenue::{OverallSummary, overall_summary};
use super::trends::{DailyStats, PeakDay, daily_trend, peak_of};
use crate::app::models::EnrichedRecord;
use crate::config::{AnalyticsConfig, ProductRanking};
use tracing::debug;

/// Every analytics view over one batch of enriched records
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsReport {
    pub overall: OverallSummary,
    pub regions: Vec<RegionStats>,
    pub top_products: Vec<ProductStats>,
    pub ranking: ProductRanking,
    /// All customers, biggest spender first
    pub customers: Vec<CustomerStats>,
    pub daily_trend: Vec<DailyStats>,
    pub peak_day: Option<PeakDay>,
    pub low_performers: Vec<ProductStats>,
    pub low_performer_threshold: i64,
    pub enrichment: EnrichmentSummary,
}

impl AnalyticsReport {
    pub fn compute(records: &[EnrichedRecord], config: &AnalyticsConfig) -> Self {
        let daily_trend = daily_trend(records);
        let peak_day = peak_of(&daily_trend);

        let report = Self {
            overall: overall_summary(records),
            regions: region_rollup(records),
            top_products: top_products(records, config.top_n, config.product_ranking),
            ranking: config.product_ranking,
            customers: customer_analysis(records),
            daily_trend,
            peak_day,
            low_performers: low_performers(records, config.low_performer_threshold),
            low_performer_threshold: config.low_performer_threshold,
            enrichment: enrichment_summary(records),
        };

        debug!(
            "Analytics: {} regions, {} products ranked, {} customers, {} days",
            report.regions.len(),
            report.top_products.len(),
            report.customers.len(),
            report.daily_trend.len()
        );

        report
    }

    /// The `n` biggest spenders
    pub fn top_customers(&self, n: usize) -> &[CustomerStats] {
        &self.customers[..n.min(self.customers.len())]
    }
}
