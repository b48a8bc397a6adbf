//! Data models for sales transaction processing
//!
//! This module contains the record types that flow through the pipeline:
//! raw parsed records, validation outcomes, cleaned records and records
//! enriched with product catalog metadata.

use crate::constants::{UNKNOWN_SENTINEL, columns};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::ops::{Add, Mul};

// =============================================================================
// Raw Record Structure
// =============================================================================

/// A single transaction line keyed by the header's column names
///
/// Values are kept exactly as they appeared in the file. Columns missing from a
/// short line are simply absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRecord {
    fields: HashMap<String, String>,
    line_number: usize,
}

impl RawRecord {
    /// Create an empty record for the given 1-based source line
    pub fn new(line_number: usize) -> Self {
        Self {
            fields: HashMap::new(),
            line_number,
        }
    }

    /// Build a record from column/value pairs; later duplicates win
    pub fn from_pairs<K, V>(line_number: usize, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::new(line_number);
        for (key, value) in pairs {
            record.insert(key, value);
        }
        record
    }

    /// Set a column value, replacing any previous value
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Get the raw value of a column
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Check whether a column is present
    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    /// Source line number (1-based, header is line 1)
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Number of columns present
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Transaction identifier, if present
    pub fn transaction_id(&self) -> Option<&str> {
        self.get(columns::TRANSACTION_ID)
    }
}

// =============================================================================
// Numeric Values
// =============================================================================

/// A normalized numeric field
///
/// Fields without a decimal point parse as integers, everything else as
/// floating point. Arithmetic stays integral while both operands are integers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NumericValue {
    Integer(i64),
    Float(f64),
}

impl NumericValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            NumericValue::Integer(value) => value as f64,
            NumericValue::Float(value) => value,
        }
    }

    /// True for values strictly greater than zero
    pub fn is_positive(&self) -> bool {
        match *self {
            NumericValue::Integer(value) => value > 0,
            NumericValue::Float(value) => value > 0.0,
        }
    }

    pub fn zero() -> Self {
        NumericValue::Integer(0)
    }
}

impl Default for NumericValue {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            NumericValue::Integer(value) => write!(f, "{}", value),
            // Floats keep a fractional digit so they re-parse as floats; `{:.1}`
            // never switches to exponent notation
            NumericValue::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{:.1}", value)
            }
            NumericValue::Float(value) => write!(f, "{}", value),
        }
    }
}

impl Add for NumericValue {
    type Output = NumericValue;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (NumericValue::Integer(a), NumericValue::Integer(b)) => a
                .checked_add(b)
                .map(NumericValue::Integer)
                .unwrap_or(NumericValue::Float(a as f64 + b as f64)),
            (a, b) => NumericValue::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl Mul for NumericValue {
    type Output = NumericValue;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (NumericValue::Integer(a), NumericValue::Integer(b)) => a
                .checked_mul(b)
                .map(NumericValue::Integer)
                .unwrap_or(NumericValue::Float(a as f64 * b as f64)),
            (a, b) => NumericValue::Float(a.as_f64() * b.as_f64()),
        }
    }
}

impl std::iter::Sum for NumericValue {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NumericValue::zero(), Add::add)
    }
}

// =============================================================================
// Validation Outcome
// =============================================================================

/// Why a record was rejected, in rule evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ValidationReason {
    InvalidTransactionId,
    MissingCustomerId,
    MissingRegion,
    NonPositiveQuantity,
    NonPositiveUnitPrice,
}

impl ValidationReason {
    /// All reasons in the order the rules are evaluated
    pub const ALL: [ValidationReason; 5] = [
        ValidationReason::InvalidTransactionId,
        ValidationReason::MissingCustomerId,
        ValidationReason::MissingRegion,
        ValidationReason::NonPositiveQuantity,
        ValidationReason::NonPositiveUnitPrice,
    ];

    /// Human-readable label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            ValidationReason::InvalidTransactionId => "Invalid TransactionID",
            ValidationReason::MissingCustomerId => "Missing CustomerID",
            ValidationReason::MissingRegion => "Missing Region",
            ValidationReason::NonPositiveQuantity => "Invalid Quantity",
            ValidationReason::NonPositiveUnitPrice => "Invalid UnitPrice",
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A rejected record together with the first rule it violated
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidRecord {
    pub record: RawRecord,
    pub reason: ValidationReason,
}

/// Result of validating one raw record
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Valid(CleanedRecord),
    Invalid(InvalidRecord),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }
}

// =============================================================================
// Cleaned Record
// =============================================================================

/// A validated record in canonical form
///
/// `ProductName` carries no commas and `Quantity`/`UnitPrice` hold the
/// normalizer's canonical text. Numeric values are always re-derived through
/// the normalizer rather than cached here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedRecord(RawRecord);

impl CleanedRecord {
    /// Wrap a record that has already been through the cleaner
    pub fn new(record: RawRecord) -> Self {
        Self(record)
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(column)
    }

    pub fn line_number(&self) -> usize {
        self.0.line_number()
    }

    pub fn as_raw(&self) -> &RawRecord {
        &self.0
    }

    pub fn into_raw(self) -> RawRecord {
        self.0
    }
}

// =============================================================================
// Product Catalog Metadata
// =============================================================================

/// Catalog-specific product attribute
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProductDetail {
    /// Warranty length, reported by the static product table
    WarrantyMonths(u32),
    /// Average customer rating, reported by the HTTP catalog
    Rating(f64),
}

impl fmt::Display for ProductDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductDetail::WarrantyMonths(months) => write!(f, "{}", months),
            ProductDetail::Rating(rating) => write!(f, "{}", rating),
        }
    }
}

/// Product metadata returned by a catalog lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub category: String,
    /// Manufacturer (static table) or brand (HTTP catalog)
    pub manufacturer: String,
    pub detail: ProductDetail,
}

impl ProductInfo {
    pub fn new(
        category: impl Into<String>,
        manufacturer: impl Into<String>,
        detail: ProductDetail,
    ) -> Self {
        Self {
            category: category.into(),
            manufacturer: manufacturer.into(),
            detail,
        }
    }

    /// Sentinel stored on records the catalog has no entry for
    pub fn unknown() -> Self {
        Self::new(
            UNKNOWN_SENTINEL,
            UNKNOWN_SENTINEL,
            ProductDetail::WarrantyMonths(0),
        )
    }
}

// =============================================================================
// Enriched Record
// =============================================================================

/// A cleaned record merged with catalog metadata
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    pub record: CleanedRecord,
    pub product: ProductInfo,
    /// True iff the catalog returned an entry for this record's product
    pub api_match: bool,
}

impl EnrichedRecord {
    pub fn matched(record: CleanedRecord, product: ProductInfo) -> Self {
        Self {
            record,
            product,
            api_match: true,
        }
    }

    pub fn unmatched(record: CleanedRecord) -> Self {
        Self {
            record,
            product: ProductInfo::unknown(),
            api_match: false,
        }
    }

    /// Get a transaction column value
    pub fn get(&self, column: &str) -> Option<&str> {
        self.record.get(column)
    }

    /// Value of an export column, including the enrichment columns
    pub fn export_value(&self, column: &str) -> Option<String> {
        match column {
            columns::CATEGORY => Some(self.product.category.clone()),
            columns::MANUFACTURER => Some(self.product.manufacturer.clone()),
            columns::WARRANTY_MONTHS => Some(self.product.detail.to_string()),
            other => self.record.get(other).map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_record_later_duplicate_wins() {
        let record = RawRecord::from_pairs(2, [("Region", "North"), ("Region", "South")]);
        assert_eq!(record.get("Region"), Some("South"));
        assert_eq!(record.len(), 1);
        assert_eq!(record.line_number(), 2);
    }

    #[test]
    fn test_numeric_display_canonical_forms() {
        assert_eq!(NumericValue::Integer(2).to_string(), "2");
        assert_eq!(NumericValue::Float(10.0).to_string(), "10.0");
        assert_eq!(NumericValue::Float(1234.5).to_string(), "1234.5");
        assert_eq!(NumericValue::Float(0.1).to_string(), "0.1");
        assert_eq!(
            NumericValue::Float(1e20).to_string(),
            "100000000000000000000.0"
        );
    }

    #[test]
    fn test_numeric_arithmetic_keeps_integers() {
        let sum = NumericValue::Integer(2) + NumericValue::Integer(3);
        assert_eq!(sum, NumericValue::Integer(5));

        let product = NumericValue::Integer(2) * NumericValue::Float(10.5);
        assert_eq!(product, NumericValue::Float(21.0));

        let total: NumericValue = vec![NumericValue::Integer(1), NumericValue::Integer(4)]
            .into_iter()
            .sum();
        assert_eq!(total, NumericValue::Integer(5));

        let overflow = NumericValue::Integer(i64::MAX) + NumericValue::Integer(1);
        assert!(matches!(overflow, NumericValue::Float(_)));
    }

    #[test]
    fn test_validation_reason_labels() {
        assert_eq!(
            ValidationReason::InvalidTransactionId.to_string(),
            "Invalid TransactionID"
        );
        assert_eq!(ValidationReason::NonPositiveUnitPrice.label(), "Invalid UnitPrice");
        assert_eq!(ValidationReason::ALL.len(), 5);
    }

    #[test]
    fn test_enriched_export_values() {
        let cleaned = CleanedRecord::new(RawRecord::from_pairs(
            2,
            [("TransactionID", "T001"), ("ProductID", "P999")],
        ));
        let enriched = EnrichedRecord::unmatched(cleaned);

        assert!(!enriched.api_match);
        assert_eq!(enriched.export_value("Category").as_deref(), Some("Unknown"));
        assert_eq!(enriched.export_value("Manufacturer").as_deref(), Some("Unknown"));
        assert_eq!(enriched.export_value("WarrantyMonths").as_deref(), Some("0"));
        assert_eq!(enriched.export_value("TransactionID").as_deref(), Some("T001"));
        assert_eq!(enriched.export_value("Region"), None);
    }

    #[test]
    fn test_product_detail_display() {
        assert_eq!(ProductDetail::WarrantyMonths(24).to_string(), "24");
        assert_eq!(ProductDetail::Rating(4.5).to_string(), "4.5");
    }
}
