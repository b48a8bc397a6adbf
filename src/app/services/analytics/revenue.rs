//! Revenue figures and the overall summary

use crate::app::models::{EnrichedRecord, NumericValue};
use crate::app::services::record_parser::field_normalizer::non_blank;
use crate::app::services::record_parser::parse_numeric_field;
use crate::constants::columns;

/// Quantity and revenue of one record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordFigures {
    pub quantity: NumericValue,
    pub revenue: f64,
}

/// Figures for a record, or `None` when quantity or unit price do not parse
pub fn record_figures(record: &EnrichedRecord) -> Option<RecordFigures> {
    let quantity = parse_numeric_field(record.get(columns::QUANTITY))?;
    let unit_price = parse_numeric_field(record.get(columns::UNIT_PRICE))?;

    Some(RecordFigures {
        quantity,
        revenue: (quantity * unit_price).as_f64(),
    })
}

/// Quantity x unit price for a record
pub fn record_revenue(record: &EnrichedRecord) -> Option<f64> {
    record_figures(record).map(|figures| figures.revenue)
}

/// Round a monetary value to two decimal places
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Unrounded revenue sum over every revenue-bearing record
pub(crate) fn revenue_sum(records: &[EnrichedRecord]) -> f64 {
    records
        .iter()
        .filter_map(record_revenue)
        .fold(0.0, |total, revenue| total + revenue)
}

/// Total revenue, rounded to two decimal places
pub fn total_revenue(records: &[EnrichedRecord]) -> f64 {
    round_to_cents(revenue_sum(records))
}

/// First and last transaction date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Headline figures for a batch of records
#[derive(Debug, Clone, PartialEq)]
pub struct OverallSummary {
    pub total_revenue: f64,
    /// Revenue-bearing records
    pub transaction_count: usize,
    /// Zero when there are no transactions
    pub average_order_value: f64,
    pub date_range: Option<DateRange>,
}

pub fn overall_summary(records: &[EnrichedRecord]) -> OverallSummary {
    let mut revenue = 0.0;
    let mut transaction_count = 0;
    let mut date_bounds: Option<(&str, &str)> = None;

    for record in records {
        let Some(figures) = record_figures(record) else {
            continue;
        };
        revenue += figures.revenue;
        transaction_count += 1;

        // Date strings compare lexically, which is chronological for ISO dates
        if let Some(date) = non_blank(record.get(columns::DATE)) {
            date_bounds = Some(match date_bounds {
                Some((start, end)) => (start.min(date), end.max(date)),
                None => (date, date),
            });
        }
    }

    let average_order_value = if transaction_count == 0 {
        0.0
    } else {
        revenue / transaction_count as f64
    };

    OverallSummary {
        total_revenue: round_to_cents(revenue),
        transaction_count,
        average_order_value,
        date_range: date_bounds.map(|(start, end)| DateRange {
            start: start.to_string(),
            end: end.to_string(),
        }),
    }
}
