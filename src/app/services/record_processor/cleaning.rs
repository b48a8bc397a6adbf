//! Canonical form for validated records

use crate::app::models::{CleanedRecord, RawRecord};
use crate::app::services::record_parser::{clean_numeric_field, clean_text_field};
use crate::constants::columns;

/// Rewrite a record in canonical form
///
/// `ProductName` loses embedded commas and `Quantity`/`UnitPrice` are replaced
/// by the normalizer's canonical text. Absent fields stay absent and every other
/// field is untouched. Cleaning an already clean record changes nothing.
pub fn clean_record(record: RawRecord) -> CleanedRecord {
    CleanedRecord::new(clean_fields(record))
}

fn clean_fields(mut record: RawRecord) -> RawRecord {
    if let Some(name) = clean_text_field(record.get(columns::PRODUCT_NAME)) {
        record.insert(columns::PRODUCT_NAME, name);
    }

    for column in [columns::QUANTITY, columns::UNIT_PRICE] {
        if record.contains(column) {
            let canonical = clean_numeric_field(record.get(column)).to_string();
            record.insert(column, canonical);
        }
    }

    record
}
