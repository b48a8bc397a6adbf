//! Tests for the pipe-delimited record parser

use super::*;
use crate::app::services::record_parser::RecordParser;

#[test]
fn test_parse_standard_content() {
    let result = RecordParser::new().parse_str(&create_test_sales_content());

    assert_eq!(result.header.len(), 8);
    assert_eq!(result.records.len(), 4);
    assert_eq!(result.stats.total_lines, 5);
    assert_eq!(result.stats.blank_lines_skipped, 1);

    let first = &result.records[0];
    assert_eq!(first.get("TransactionID"), Some("T001"));
    assert_eq!(first.get("UnitPrice"), Some("45,000"));
    assert_eq!(first.get("Region"), Some("North"));
    assert_eq!(first.line_number(), 2);

    // Blank line 4 is skipped, so the third record comes from line 5
    assert_eq!(result.records[2].line_number(), 5);
    assert_eq!(
        result.records[2].get("ProductName"),
        Some("Mechanical Keyboard, RGB")
    );
}

#[test]
fn test_empty_input_yields_no_records() {
    let lines: [&str; 0] = [];
    let result = RecordParser::new().parse_lines(&lines);

    assert!(result.records.is_empty());
    assert!(result.header.is_empty());
    assert_eq!(result.stats.total_lines, 0);
}

#[test]
fn test_header_only_input_yields_no_records() {
    let result = RecordParser::new().parse_str(HEADER);

    assert!(result.records.is_empty());
    assert_eq!(result.header.len(), 8);
}

#[test]
fn test_short_line_leaves_trailing_columns_absent() {
    let content = format!("{HEADER}\nT001|2024-01-01|P101|Widget|2");
    let result = RecordParser::new().parse_str(&content);

    assert_eq!(result.records.len(), 1);
    let record = &result.records[0];
    assert_eq!(record.get("Quantity"), Some("2"));
    assert!(!record.contains("UnitPrice"));
    assert!(!record.contains("CustomerID"));
    assert!(!record.contains("Region"));
    assert_eq!(result.stats.short_records, 1);
}

#[test]
fn test_long_line_ignores_extra_fields() {
    let content = "A|B\n1|2|3|4";
    let result = RecordParser::new().parse_str(content);

    assert_eq!(result.records[0].len(), 2);
    assert_eq!(result.records[0].get("B"), Some("2"));
    assert_eq!(result.stats.long_records, 1);
}

#[test]
fn test_duplicate_header_later_column_wins() {
    let content = "ID|Region|Region\nT1|North|South";
    let result = RecordParser::new().parse_str(content);

    assert_eq!(result.header, vec!["ID", "Region", "Region"]);
    assert_eq!(result.records[0].get("Region"), Some("South"));
}

#[test]
fn test_whitespace_lines_and_crlf() {
    let content = format!("{HEADER}\r\n   \r\n\t\r\nT001|2024-01-01|P101|Widget|2|10.00|C1|North\r\n");
    let result = RecordParser::new().parse_str(&content);

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.stats.blank_lines_skipped, 2);
    assert_eq!(result.records[0].get("Region"), Some("North"));
}

#[test]
fn test_surrounding_whitespace_trimmed_from_line() {
    let content = "A|B\n  x|y  ";
    let result = RecordParser::new().parse_str(content);

    assert_eq!(result.records[0].get("A"), Some("x"));
    assert_eq!(result.records[0].get("B"), Some("y"));
}

#[test]
fn test_custom_delimiter() {
    let content = "A;B\n1;2";
    let result = RecordParser::with_delimiter(';').parse_str(content);

    assert_eq!(result.records[0].get("A"), Some("1"));
    assert_eq!(result.records[0].get("B"), Some("2"));
}

#[tokio::test]
async fn test_parse_file() {
    let file = create_temp_file(create_test_sales_content().as_bytes());
    let result = RecordParser::new().parse_file(file.path()).await.unwrap();

    assert_eq!(result.records.len(), 4);
    assert_eq!(result.records[3].get("TransactionID"), Some("X004"));
}

#[tokio::test]
async fn test_parse_file_latin1_fallback() {
    // "Café" encoded as Latin-1 is not valid UTF-8
    let mut bytes = format!("{HEADER}\nT001|2024-01-01|P101|Caf").into_bytes();
    bytes.push(0xE9);
    bytes.extend_from_slice(b"|2|10.00|C1|North\n");
    let file = create_temp_file(&bytes);

    let result = RecordParser::new().parse_file(file.path()).await.unwrap();

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].get("ProductName"), Some("Café"));
}

#[tokio::test]
async fn test_parse_missing_file() {
    let result = RecordParser::new()
        .parse_file(std::path::Path::new("/no/such/sales.txt"))
        .await;

    assert!(matches!(result, Err(crate::Error::FileNotFound { .. })));
}
