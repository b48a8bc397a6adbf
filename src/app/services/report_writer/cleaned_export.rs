//! Cleaned data export

use crate::app::models::EnrichedRecord;
use crate::constants::{FIELD_DELIMITER, columns};

/// Render enriched records as a pipe-delimited file with a fixed header
///
/// Missing fields are written as empty strings. Every line, the header
/// included, ends with a newline.
pub fn render_cleaned_export(records: &[EnrichedRecord]) -> String {
    let delimiter = FIELD_DELIMITER.to_string();
    let mut output = columns::CLEANED_EXPORT.join(&delimiter);
    output.push('\n');

    for record in records {
        let line: Vec<String> = columns::CLEANED_EXPORT
            .iter()
            .map(|column| record.export_value(column).unwrap_or_default())
            .collect();
        output.push_str(&line.join(&delimiter));
        output.push('\n');
    }

    output
}
