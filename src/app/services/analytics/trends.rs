//! Daily sales trend and peak day

use super::revenue::record_revenue;
use crate::app::models::EnrichedRecord;
use crate::app::services::record_parser::field_normalizer::non_blank;
use crate::constants::columns;
use std::collections::{BTreeMap, HashSet};

/// Aggregates for one date
#[derive(Debug, Clone, PartialEq)]
pub struct DailyStats {
    pub date: String,
    pub revenue: f64,
    pub transaction_count: usize,
    pub unique_customers: usize,
}

/// Date with the highest revenue
#[derive(Debug, Clone, PartialEq)]
pub struct PeakDay {
    pub date: String,
    pub revenue: f64,
    pub transaction_count: usize,
}

/// Per-date totals in ascending date order
pub fn daily_trend(records: &[EnrichedRecord]) -> Vec<DailyStats> {
    let mut days: BTreeMap<&str, (f64, usize, HashSet<&str>)> = BTreeMap::new();

    for record in records {
        let Some(date) = non_blank(record.get(columns::DATE)) else {
            continue;
        };
        let Some(revenue) = record_revenue(record) else {
            continue;
        };

        let (day_revenue, count, customers) = days.entry(date).or_default();
        *day_revenue += revenue;
        *count += 1;
        if let Some(customer) = non_blank(record.get(columns::CUSTOMER_ID)) {
            customers.insert(customer);
        }
    }

    days.into_iter()
        .map(|(date, (revenue, transaction_count, customers))| DailyStats {
            date: date.to_string(),
            revenue,
            transaction_count,
            unique_customers: customers.len(),
        })
        .collect()
}

/// Highest-revenue date; the earliest date wins a tie
pub fn peak_day(records: &[EnrichedRecord]) -> Option<PeakDay> {
    peak_of(&daily_trend(records))
}

/// Peak day of an already computed trend
pub fn peak_of(trend: &[DailyStats]) -> Option<PeakDay> {
    let mut peak: Option<&DailyStats> = None;

    for day in trend {
        if peak.is_none_or(|best| day.revenue > best.revenue) {
            peak = Some(day);
        }
    }

    peak.map(|day| PeakDay {
        date: day.date.clone(),
        revenue: day.revenue,
        transaction_count: day.transaction_count,
    })
}
