//! Sectioned text report
//!
//! Sections appear in a fixed order: header, processing summary, invalid
//! records, overall summary, regions, top products, top customers, daily
//! trend, product performance and enrichment summary.

use super::format::{format_money, group_thousands};
use crate::app::services::analytics::AnalyticsReport;
use crate::app::services::record_processor::ProcessingResult;
use crate::config::{AnalyticsConfig, ProductRanking};
use crate::constants::{REPORT_TIMESTAMP_FORMAT, REPORT_WIDTH};
use chrono::NaiveDateTime;

/// Everything the text report is rendered from
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    pub processing: &'a ProcessingResult,
    pub analytics: &'a AnalyticsReport,
    pub config: &'a AnalyticsConfig,
    pub generated_at: NaiveDateTime,
}

/// Render the full text report
pub fn render_report(input: &ReportInput<'_>) -> String {
    let mut report = ReportBuilder::new();

    write_header(&mut report, input);
    write_processing_summary(&mut report, input);
    write_invalid_records(&mut report, input);
    write_overall_summary(&mut report, input.analytics);
    write_regions(&mut report, input.analytics);
    write_top_products(&mut report, input);
    write_top_customers(&mut report, input);
    write_daily_trend(&mut report, input.analytics);
    write_product_performance(&mut report, input.analytics);
    write_enrichment_summary(&mut report, input.analytics);

    report.rule('=');
    report.line(centered("END OF REPORT"));
    report.rule('=');

    report.finish()
}

/// Line accumulator for report text
struct ReportBuilder {
    lines: Vec<String>,
}

impl ReportBuilder {
    fn new() -> Self {
        Self { lines: Vec::new() }
    }

    fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn rule(&mut self, ch: char) {
        self.lines.push(ch.to_string().repeat(REPORT_WIDTH));
    }

    fn section(&mut self, title: &str) {
        self.line(title);
        self.rule('-');
    }

    fn finish(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

fn centered(text: &str) -> String {
    format!("{:^width$}", text, width = REPORT_WIDTH)
        .trim_end()
        .to_string()
}

fn write_header(report: &mut ReportBuilder, input: &ReportInput<'_>) {
    report.rule('=');
    report.line(centered("SALES ANALYTICS REPORT"));
    report.line(centered(&format!(
        "Generated: {}",
        input.generated_at.format(REPORT_TIMESTAMP_FORMAT)
    )));
    report.line(centered(&format!(
        "Records Processed: {}",
        input.processing.stats.valid
    )));
    report.rule('=');
    report.blank();
}

fn write_processing_summary(report: &mut ReportBuilder, input: &ReportInput<'_>) {
    let stats = &input.processing.stats;

    report.section("DATA PROCESSING SUMMARY");
    report.line(format!("Total records processed: {}", stats.total_input));
    report.line(format!("Valid records:           {}", stats.valid));
    report.line(format!("Invalid records removed: {}", stats.invalid));
    report.blank();
}

fn write_invalid_records(report: &mut ReportBuilder, input: &ReportInput<'_>) {
    let invalid = &input.processing.invalid;
    if invalid.is_empty() {
        return;
    }

    let limit = input.config.invalid_listing_limit;
    report.section("INVALID RECORDS (Removed)");
    for (index, rejected) in invalid.iter().take(limit).enumerate() {
        report.line(format!(
            "{}. {} - {}",
            index + 1,
            rejected.record.transaction_id().unwrap_or("N/A"),
            rejected.reason
        ));
    }
    if invalid.len() > limit {
        report.line(format!(
            "... and {} more invalid records",
            invalid.len() - limit
        ));
    }
    report.blank();
}

fn write_overall_summary(report: &mut ReportBuilder, analytics: &AnalyticsReport) {
    let overall = &analytics.overall;
    let date_range = overall
        .date_range
        .as_ref()
        .map(|range| format!("{} to {}", range.start, range.end))
        .unwrap_or_else(|| "N/A".to_string());

    report.section("OVERALL SUMMARY");
    report.line(format!(
        "Total Revenue:        {}",
        format_money(overall.total_revenue)
    ));
    report.line(format!("Total Transactions:   {}", overall.transaction_count));
    report.line(format!(
        "Average Order Value:  {}",
        format_money(overall.average_order_value)
    ));
    report.line(format!("Date Range:           {}", date_range));
    report.blank();
}

fn write_regions(report: &mut ReportBuilder, analytics: &AnalyticsReport) {
    report.section("REGION-WISE PERFORMANCE");
    report.line(format!(
        "{:<10}{:<18}{:<12}{:<14}{}",
        "Region", "Sales", "% of Total", "Transactions", "Units"
    ));
    for region in &analytics.regions {
        report.line(format!(
            "{:<10}{:<18}{:<12}{:<14}{}",
            region.region,
            format_money(region.revenue),
            format!("{:.2}%", region.percentage),
            region.transaction_count,
            region.quantity
        ));
    }
    report.blank();
}

fn write_top_products(report: &mut ReportBuilder, input: &ReportInput<'_>) {
    let basis = match input.analytics.ranking {
        ProductRanking::Revenue => "REVENUE",
        ProductRanking::Quantity => "QUANTITY",
    };

    report.section(&format!("TOP {} PRODUCTS BY {}", input.config.top_n, basis));
    report.line(format!(
        "{:<6}{:<26}{:<12}{}",
        "Rank", "Product Name", "Qty Sold", "Revenue"
    ));
    for (index, product) in input.analytics.top_products.iter().enumerate() {
        report.line(format!(
            "{:<6}{:<26}{:<12}{}",
            index + 1,
            product.name,
            product.quantity.to_string(),
            format_money(product.revenue)
        ));
    }
    report.blank();
}

fn write_top_customers(report: &mut ReportBuilder, input: &ReportInput<'_>) {
    let limit = input.config.top_customers;

    report.section(&format!("TOP {} CUSTOMERS", limit));
    report.line(format!(
        "{:<6}{:<15}{:<18}{:<8}{}",
        "Rank", "Customer ID", "Total Spent", "Orders", "Avg Order"
    ));
    for (index, customer) in input.analytics.top_customers(limit).iter().enumerate() {
        report.line(format!(
            "{:<6}{:<15}{:<18}{:<8}{}",
            index + 1,
            customer.customer_id,
            format_money(customer.total_spent),
            customer.purchase_count,
            format_money(customer.average_order_value)
        ));
    }
    report.blank();
}

fn write_daily_trend(report: &mut ReportBuilder, analytics: &AnalyticsReport) {
    report.section("DAILY SALES TREND");
    report.line(format!(
        "{:<15}{:<18}{:<15}{}",
        "Date", "Revenue", "Transactions", "Unique Cust."
    ));
    for day in &analytics.daily_trend {
        report.line(format!(
            "{:<15}{:<18}{:<15}{}",
            day.date,
            format_money(day.revenue),
            day.transaction_count,
            day.unique_customers
        ));
    }
    report.blank();
}

fn write_product_performance(report: &mut ReportBuilder, analytics: &AnalyticsReport) {
    report.section("PRODUCT PERFORMANCE ANALYSIS");

    match &analytics.peak_day {
        Some(peak) => report.line(format!(
            "Best Selling Day: {} ({}, {} transactions)",
            peak.date,
            format_money(peak.revenue),
            peak.transaction_count
        )),
        None => report.line("Best Selling Day: N/A"),
    }
    report.blank();

    report.line(format!(
        "Low Performing Products (Qty < {}):",
        analytics.low_performer_threshold
    ));
    if analytics.low_performers.is_empty() {
        report.line(" - None");
    }
    for product in &analytics.low_performers {
        report.line(format!(
            " - {}: Qty={}, Revenue={}",
            product.name,
            product.quantity,
            format_money(product.revenue)
        ));
    }
    report.blank();

    report.line("Average Transaction Value per Region:");
    if analytics.regions.is_empty() {
        report.line(" - None");
    }
    for region in &analytics.regions {
        report.line(format!(
            " - {}: {}",
            region.region,
            format_money(region.average_transaction_value)
        ));
    }
    report.blank();
}

fn write_enrichment_summary(report: &mut ReportBuilder, analytics: &AnalyticsReport) {
    let enrichment = &analytics.enrichment;

    report.section("API ENRICHMENT SUMMARY");
    report.line(format!(
        "Total Products Enriched: {}/{}",
        enrichment.matched, enrichment.total
    ));
    report.line(format!("Success Rate: {}%", group_thousands(enrichment.success_rate)));
    report.line("Products Not Enriched:");
    if enrichment.unmatched_product_ids.is_empty() {
        report.line(" - None");
    }
    for product_id in &enrichment.unmatched_product_ids {
        report.line(format!(" - {}", product_id));
    }
    report.blank();
}
