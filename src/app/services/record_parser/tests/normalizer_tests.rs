//! Tests for numeric and text field normalization

use crate::app::models::NumericValue;
use crate::app::services::record_parser::field_normalizer::non_blank;
use crate::app::services::record_parser::{
    clean_numeric_field, clean_text_field, parse_numeric_field,
};

#[test]
fn test_clean_numeric_strips_thousands_separators() {
    assert_eq!(
        clean_numeric_field(Some("1,234.50")),
        NumericValue::Float(1234.5)
    );
    assert_eq!(clean_numeric_field(Some("45,000")), NumericValue::Integer(45000));
    assert_eq!(
        clean_numeric_field(Some("1,000,000")),
        NumericValue::Integer(1_000_000)
    );
}

#[test]
fn test_clean_numeric_integer_and_float_paths() {
    assert_eq!(clean_numeric_field(Some("2")), NumericValue::Integer(2));
    assert_eq!(clean_numeric_field(Some("10.00")), NumericValue::Float(10.0));
    assert_eq!(clean_numeric_field(Some("-3")), NumericValue::Integer(-3));
    assert_eq!(clean_numeric_field(Some(" 7 ")), NumericValue::Integer(7));
}

#[test]
fn test_clean_numeric_fails_soft_to_zero() {
    assert_eq!(clean_numeric_field(Some("")), NumericValue::Integer(0));
    assert_eq!(clean_numeric_field(Some("abc")), NumericValue::Integer(0));
    assert_eq!(clean_numeric_field(Some("1.2.3")), NumericValue::Integer(0));
    assert_eq!(clean_numeric_field(None), NumericValue::Integer(0));
    assert_eq!(clean_numeric_field(Some("1.2.3")).as_f64(), 0.0);
}

#[test]
fn test_parse_numeric_is_strict() {
    assert_eq!(parse_numeric_field(Some("abc")), None);
    assert_eq!(parse_numeric_field(Some("")), None);
    assert_eq!(parse_numeric_field(Some("   ")), None);
    assert_eq!(parse_numeric_field(None), None);
    assert_eq!(parse_numeric_field(Some("1e999.0")), None);
    assert_eq!(
        parse_numeric_field(Some("0")),
        Some(NumericValue::Integer(0))
    );
    assert_eq!(
        parse_numeric_field(Some("12.5")),
        Some(NumericValue::Float(12.5))
    );
}

#[test]
fn test_clean_text_field() {
    assert_eq!(
        clean_text_field(Some("Keyboard, RGB")).as_deref(),
        Some("Keyboard  RGB")
    );
    assert_eq!(clean_text_field(Some("Mouse")).as_deref(), Some("Mouse"));
    assert_eq!(clean_text_field(Some("a,b,c")).as_deref(), Some("a b c"));
    assert_eq!(clean_text_field(None), None);
    assert_eq!(clean_text_field(Some("")).as_deref(), Some(""));
}

#[test]
fn test_non_blank() {
    assert_eq!(non_blank(Some("  C001 ")), Some("C001"));
    assert_eq!(non_blank(Some("   ")), None);
    assert_eq!(non_blank(None), None);
}
