//! Command-line argument definitions for the sales analytics pipeline
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::config::{CatalogSource, KeyStrategy, ProductRanking};
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the sales analytics pipeline
///
/// Validates and cleans pipe-delimited sales transactions, enriches them with
/// product catalog metadata and writes a text report plus a cleaned export.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sales-analytics",
    version,
    about = "Validate, enrich and report on pipe-delimited sales transaction files",
    long_about = "Reads a pipe-delimited sales transaction file, rejects records that fail \
                  validation, enriches the rest with product metadata from a built-in table \
                  or an HTTP catalog, and writes a sectioned text report together with a \
                  cleaned data export."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the full pipeline and write the report and cleaned export (default command)
    Process(ProcessArgs),
    /// Parse and validate a transaction file without writing anything
    Validate(ValidateArgs),
    /// Check that the product catalog is reachable
    Catalog(CatalogArgs),
}

/// Arguments for the process command
#[derive(Debug, Clone, Default, Parser)]
pub struct ProcessArgs {
    /// Pipe-delimited transaction file
    ///
    /// Defaults to data/sales_data.txt when neither the config file nor
    /// SALES_ANALYTICS_INPUT set it.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Pipe-delimited transaction file to process"
    )]
    pub input_path: Option<PathBuf>,

    /// Directory receiving sales_report.txt and cleaned_sales_data.txt
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory for the report and cleaned export"
    )]
    pub output_dir: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// ~/.config/sales-analytics/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub catalog: CatalogSelection,

    /// Number of products in the top-N ranking
    #[arg(long = "top-n", value_name = "N")]
    pub top_n: Option<usize>,

    /// Ranking used for the top-N products
    #[arg(long = "rank-by", value_enum, value_name = "MODE")]
    pub rank_by: Option<ProductRanking>,

    /// Products selling fewer units than this are reported as low performers
    #[arg(long = "low-threshold", value_name = "UNITS")]
    pub low_threshold: Option<i64>,

    /// Disable progress bars
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Print the rendered report to stdout as well
    #[arg(long = "print-report")]
    pub print_report: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Default, Parser)]
pub struct ValidateArgs {
    /// Pipe-delimited transaction file
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input_path: Option<PathBuf>,

    /// Path to configuration file (TOML format)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the catalog command
#[derive(Debug, Clone, Default, Parser)]
pub struct CatalogArgs {
    #[command(flatten)]
    pub catalog: CatalogSelection,

    /// Path to configuration file (TOML format)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Catalog options shared by the process and catalog commands
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CatalogSelection {
    /// Product catalog backing enrichment
    #[arg(long = "catalog", value_enum, value_name = "SOURCE")]
    pub source: Option<CatalogSource>,

    /// Base URL of the HTTP product catalog
    #[arg(long = "catalog-url", value_name = "URL")]
    pub url: Option<String>,

    /// How catalog keys are derived from ProductID
    #[arg(long = "key-strategy", value_enum, value_name = "STRATEGY")]
    pub key_strategy: Option<KeyStrategy>,
}

impl Args {
    /// Get the command to execute, defaulting to Process if none specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Process(ProcessArgs::default()))
    }
}

/// Map a `-v` count to a log level
/// Log level requested by `-v` flags, `None` when none were given
fn level_for_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

impl ProcessArgs {
    /// Validate command line arguments
    pub fn validate(&self) -> Result<()> {
        if let Some(input_path) = &self.input_path {
            if input_path.is_dir() {
                return Err(Error::configuration(format!(
                    "Input path is a directory, expected a file: {}",
                    input_path.display()
                )));
            }
        }

        if self.top_n == Some(0) {
            return Err(Error::configuration("--top-n must be greater than 0"));
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Log level requested on the command line, if any
    ///
    /// Without `-v` or `-q` the configured level applies.
    pub fn get_log_level(&self) -> Option<&'static str> {
        if self.quiet {
            Some("error")
        } else {
            level_for_verbosity(self.verbose)
        }
    }

    /// Progress bars are shown unless disabled or quiet
    pub fn show_progress(&self) -> bool {
        !self.no_progress && !self.quiet
    }
}

impl ValidateArgs {
    pub fn get_log_level(&self) -> Option<&'static str> {
        level_for_verbosity(self.verbose)
    }
}

impl CatalogArgs {
    pub fn get_log_level(&self) -> Option<&'static str> {
        level_for_verbosity(self.verbose)
    }
}
