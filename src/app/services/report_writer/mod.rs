//! Report rendering for processed sales data
//!
//! Rendering is pure: both outputs are returned as strings and written by the
//! caller, so a failed write never loses the rendered report.
//!
//! - [`text_report`] - Sectioned text report over the analytics views
//! - [`cleaned_export`] - Pipe-delimited export of enriched records
//! - [`format`] - Number formatting shared by the report sections

pub mod cleaned_export;
pub mod format;
pub mod text_report;

#[cfg(test)]
pub mod tests;

pub use cleaned_export::render_cleaned_export;
pub use format::{format_money, group_thousands};
pub use text_report::{ReportInput, render_report};
