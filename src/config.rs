//! Configuration management and validation.
//!
//! Provides configuration structures for input/output locations, analytics
//! parameters and product catalog selection. Configuration is layered:
//! built-in defaults, then an optional TOML file, then environment variables,
//! then command-line overrides applied by the CLI.

use crate::constants::{self, env};
use crate::{Error, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Ranking used for the top-N product view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ProductRanking {
    /// Rank products by total revenue
    #[default]
    Revenue,
    /// Rank products by total units sold
    Quantity,
}

/// Which product catalog backs the enrichment stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogSource {
    /// Built-in product table keyed by the verbatim product identifier
    #[default]
    Static,
    /// Remote HTTP catalog keyed by numeric product identifier
    Http,
}

/// How a catalog key is derived from a record's `ProductID`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum KeyStrategy {
    /// Use the product identifier exactly as written (`P101`)
    Verbatim,
    /// Use the first run of digits in the identifier (`P101` -> `101`)
    NumericSuffix,
}

impl CatalogSource {
    /// Key strategy matching the shape of this catalog's keys
    pub fn default_key_strategy(&self) -> KeyStrategy {
        match self {
            CatalogSource::Static => KeyStrategy::Verbatim,
            CatalogSource::Http => KeyStrategy::NumericSuffix,
        }
    }
}

/// Input and output locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Pipe-delimited transaction file to read
    pub input_path: PathBuf,
    /// Directory receiving the report and cleaned export
    pub output_dir: PathBuf,
    /// Report filename inside `output_dir`
    pub report_file: String,
    /// Cleaned export filename inside `output_dir`
    pub cleaned_file: String,
    /// Show progress bars while processing records
    pub show_progress: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(constants::DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from(constants::DEFAULT_OUTPUT_DIR),
            report_file: constants::REPORT_FILENAME.to_string(),
            cleaned_file: constants::CLEANED_DATA_FILENAME.to_string(),
            show_progress: true,
        }
    }
}

/// Parameters for the aggregation views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Number of products in the top-N ranking
    pub top_n: usize,
    /// Ranking mode for the top-N ranking
    pub product_ranking: ProductRanking,
    /// Products with fewer units sold than this are low performers
    pub low_performer_threshold: i64,
    /// Number of customers listed in the report
    pub top_customers: usize,
    /// Number of invalid records listed individually in the report
    pub invalid_listing_limit: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            top_n: constants::DEFAULT_TOP_N,
            product_ranking: ProductRanking::default(),
            low_performer_threshold: constants::DEFAULT_LOW_PERFORMER_THRESHOLD,
            top_customers: constants::DEFAULT_TOP_CUSTOMERS,
            invalid_listing_limit: constants::DEFAULT_INVALID_LISTING_LIMIT,
        }
    }
}

/// Product catalog selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog implementation
    pub source: CatalogSource,
    /// Key derivation policy; defaults to the one matching `source`
    pub key_strategy: Option<KeyStrategy>,
    /// Base URL of the HTTP catalog
    pub base_url: String,
    /// Timeout for the HTTP catalog fetch
    pub timeout_secs: u64,
    /// Number of products requested from the HTTP catalog
    pub fetch_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: CatalogSource::default(),
            key_strategy: None,
            base_url: constants::DEFAULT_CATALOG_URL.to_string(),
            timeout_secs: constants::DEFAULT_CATALOG_TIMEOUT_SECS,
            fetch_limit: constants::DEFAULT_CATALOG_FETCH_LIMIT,
        }
    }
}

impl CatalogConfig {
    /// Effective key strategy after applying the per-source default
    pub fn effective_key_strategy(&self) -> KeyStrategy {
        self.key_strategy
            .unwrap_or_else(|| self.source.default_key_strategy())
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level for the `sales_analytics` target
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub processing: ProcessingConfig,
    pub analytics: AnalyticsConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Default config file location (`~/.config/sales-analytics/config.toml` on Linux)
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir
            .join(constants::CONFIG_DIR_NAME)
            .join(constants::CONFIG_FILENAME))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file '{}'", path.display()),
                e,
            )
        })?;

        Self::from_toml_str(&contents).map_err(|e| match e {
            Error::ConfigParse { source, .. } => {
                Error::config_parse(path.display().to_string(), source)
            }
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        Ok(config)
    }

    /// Load configuration in layers: defaults, optional file, environment
    ///
    /// Explicit `input_path`/`output_dir` arguments win over every layer.
    pub fn load_layered(
        input_path: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        config_file: Option<&Path>,
    ) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Loading configuration file {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides();

        if let Some(input_path) = input_path {
            config.processing.input_path = input_path;
        }
        if let Some(output_dir) = output_dir {
            config.processing.output_dir = output_dir;
        }

        Ok(config)
    }

    /// Apply `SALES_ANALYTICS_*` environment overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var(env::INPUT_PATH) {
            debug!("{} overrides input path", env::INPUT_PATH);
            self.processing.input_path = PathBuf::from(value);
        }
        if let Ok(value) = std::env::var(env::OUTPUT_DIR) {
            debug!("{} overrides output directory", env::OUTPUT_DIR);
            self.processing.output_dir = PathBuf::from(value);
        }
        if let Ok(value) = std::env::var(env::CATALOG_URL) {
            debug!("{} overrides catalog URL", env::CATALOG_URL);
            self.catalog.base_url = value;
        }
    }

    /// Validate configuration values for consistency
    pub fn validate(&self) -> Result<()> {
        if self.analytics.top_n == 0 {
            return Err(Error::configuration("top_n must be greater than 0"));
        }

        if self.catalog.timeout_secs == 0 {
            return Err(Error::configuration(
                "catalog timeout_secs must be greater than 0",
            ));
        }

        if self.processing.report_file.trim().is_empty()
            || self.processing.cleaned_file.trim().is_empty()
        {
            return Err(Error::configuration("Output file names cannot be empty"));
        }

        let strategy = self.catalog.effective_key_strategy();
        if strategy != self.catalog.source.default_key_strategy() {
            return Err(Error::configuration(format!(
                "Key strategy {:?} cannot be used with the {:?} catalog (its keys require {:?})",
                strategy,
                self.catalog.source,
                self.catalog.source.default_key_strategy()
            )));
        }

        if self.catalog.source == CatalogSource::Http && self.catalog.base_url.trim().is_empty() {
            return Err(Error::configuration(
                "catalog base_url is required for the http catalog",
            ));
        }

        Ok(())
    }

    /// Full path of the report file
    pub fn report_path(&self) -> PathBuf {
        self.processing.output_dir.join(&self.processing.report_file)
    }

    /// Full path of the cleaned data export
    pub fn cleaned_data_path(&self) -> PathBuf {
        self.processing.output_dir.join(&self.processing.cleaned_file)
    }
}
