//! Record validation rules
//!
//! Rules run in a fixed order and the first failure decides the reason:
//!
//! 1. `TransactionID` present and starting with `T`
//! 2. `CustomerID` present and not blank
//! 3. `Region` present and not blank
//! 4. Normalized `Quantity` greater than zero
//! 5. Normalized `UnitPrice` greater than zero
//!
//! Numeric checks use the fail-soft normalizer, so malformed numbers count as
//! zero and fail their rule.

use crate::app::models::{
    CleanedRecord, InvalidRecord, RawRecord, ValidationOutcome, ValidationReason,
};
use crate::app::services::record_parser::clean_numeric_field;
use crate::app::services::record_parser::field_normalizer::non_blank;
use crate::constants::{TRANSACTION_ID_PREFIX, columns};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use super::cleaning::clean_record;

/// First rule the record violates, or `None` when it passes every rule
pub fn check_record(record: &RawRecord) -> Option<ValidationReason> {
    let has_valid_id = record
        .transaction_id()
        .is_some_and(|id| id.starts_with(TRANSACTION_ID_PREFIX));
    if !has_valid_id {
        return Some(ValidationReason::InvalidTransactionId);
    }

    if non_blank(record.get(columns::CUSTOMER_ID)).is_none() {
        return Some(ValidationReason::MissingCustomerId);
    }

    if non_blank(record.get(columns::REGION)).is_none() {
        return Some(ValidationReason::MissingRegion);
    }

    if !clean_numeric_field(record.get(columns::QUANTITY)).is_positive() {
        return Some(ValidationReason::NonPositiveQuantity);
    }

    if !clean_numeric_field(record.get(columns::UNIT_PRICE)).is_positive() {
        return Some(ValidationReason::NonPositiveUnitPrice);
    }

    None
}

/// Classify a record, cleaning it when valid
pub fn validate_record(record: RawRecord) -> ValidationOutcome {
    match check_record(&record) {
        None => ValidationOutcome::Valid(clean_record(record)),
        Some(reason) => {
            debug!(
                "Line {} rejected: {} ({})",
                record.line_number(),
                reason,
                record.transaction_id().unwrap_or("N/A")
            );
            ValidationOutcome::Invalid(InvalidRecord { record, reason })
        }
    }
}

/// Split records into cleaned valid records and invalid records, keeping order
pub fn partition_records(
    records: Vec<RawRecord>,
) -> (Vec<CleanedRecord>, Vec<InvalidRecord>) {
    let mut valid = Vec::with_capacity(records.len());
    let mut invalid = Vec::new();

    for record in records {
        match validate_record(record) {
            ValidationOutcome::Valid(cleaned) => valid.push(cleaned),
            ValidationOutcome::Invalid(rejected) => invalid.push(rejected),
        }
    }

    (valid, invalid)
}

/// Counts of validation results per reason
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub by_reason: BTreeMap<ValidationReason, usize>,
}

impl ValidationSummary {
    /// Summarize the invalid records of a batch of `total` records
    pub fn from_invalid(total: usize, invalid: &[InvalidRecord]) -> Self {
        let mut by_reason = BTreeMap::new();
        for rejected in invalid {
            *by_reason.entry(rejected.reason).or_insert(0) += 1;
        }

        Self {
            total,
            valid: total.saturating_sub(invalid.len()),
            invalid: invalid.len(),
            by_reason,
        }
    }

    /// Number of records rejected for `reason`
    pub fn count(&self, reason: ValidationReason) -> usize {
        self.by_reason.get(&reason).copied().unwrap_or(0)
    }
}

impl fmt::Display for ValidationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records: {} valid, {} invalid",
            self.total, self.valid, self.invalid
        )
    }
}
