//! Number formatting for report output

use crate::constants::CURRENCY_SYMBOL;

/// Format a value with two decimals and comma thousands separators
pub fn group_thousands(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // Values that round to zero print unsigned
    let sign = if value < 0.0 && formatted.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };

    format!("{sign}{grouped}.{fraction}")
}

/// Monetary value with the currency symbol (`₹1,234.50`)
pub fn format_money(value: f64) -> String {
    format!("{}{}", CURRENCY_SYMBOL, group_thousands(value))
}
