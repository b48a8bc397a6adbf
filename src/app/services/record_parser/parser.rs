//! Core transaction file parser implementation
//!
//! The first line declares the column names; every following non-blank line
//! is split on the delimiter and zipped positionally against them.

use std::path::Path;
use tracing::{debug, info};

use super::stats::{ParseResult, ParseStats};
use crate::Result;
use crate::app::adapters::filesystem;
use crate::app::models::RawRecord;
use crate::constants::FIELD_DELIMITER;

/// Parser for pipe-delimited transaction files
///
/// The parser is permissive about line shape:
/// - Lines with fewer fields than the header leave trailing columns absent
/// - Fields beyond the header's width are ignored
/// - All-whitespace lines are skipped
/// - Duplicate header names are kept; the later column wins
#[derive(Debug, Clone)]
pub struct RecordParser {
    delimiter: char,
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordParser {
    /// Create a parser for the standard `|` delimiter
    pub fn new() -> Self {
        Self {
            delimiter: FIELD_DELIMITER,
        }
    }

    /// Create a parser for a different delimiter
    pub fn with_delimiter(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Read and parse a transaction file
    pub async fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing transaction file: {}", file_path.display());

        let lines = filesystem::read_lines(file_path).await?;
        let result = self.parse_lines(&lines);

        info!("Parsed {}", result.stats.summary());
        Ok(result)
    }

    /// Parse file content already held in memory
    pub fn parse_str(&self, content: &str) -> ParseResult {
        let lines: Vec<&str> = content.lines().collect();
        self.parse_lines(&lines)
    }

    /// Parse an ordered sequence of lines, the first being the header
    pub fn parse_lines<S: AsRef<str>>(&self, lines: &[S]) -> ParseResult {
        let Some((header_line, data_lines)) = lines.split_first() else {
            debug!("No header line; nothing to parse");
            return ParseResult::empty();
        };

        let header = self.split_line(header_line.as_ref());
        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        for (index, line) in data_lines.iter().enumerate() {
            stats.total_lines += 1;
            let line = line.as_ref();

            if line.trim().is_empty() {
                stats.blank_lines_skipped += 1;
                continue;
            }

            // Header is line 1
            let line_number = index + 2;
            let values = self.split_line(line);

            if values.len() < header.len() {
                stats.short_records += 1;
                debug!(
                    "Line {} has {} fields, header declares {}",
                    line_number,
                    values.len(),
                    header.len()
                );
            } else if values.len() > header.len() {
                stats.long_records += 1;
            }

            records.push(RawRecord::from_pairs(
                line_number,
                header.iter().cloned().zip(values),
            ));
        }

        stats.records_parsed = records.len();

        ParseResult {
            header,
            records,
            stats,
        }
    }

    /// Trim the line and split it into fields
    fn split_line(&self, line: &str) -> Vec<String> {
        line.trim()
            .split(self.delimiter)
            .map(str::to_string)
            .collect()
    }
}
