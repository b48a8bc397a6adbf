//! Shared components for CLI commands
//!
//! Logging setup, layered configuration loading and the run statistics
//! reported by every command.

use crate::app::services::record_parser::{ParseResult, RecordParser};
use crate::cli::args::{CatalogSelection, ProcessArgs};
use crate::config::{CatalogSource, Config};
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Statistics reported by every command
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Records parsed from the input file
    pub records_read: usize,
    pub valid_records: usize,
    pub invalid_records: usize,
    /// Valid records matched in the product catalog
    pub records_enriched: usize,
    /// Products the catalog reported as available
    pub catalog_products: usize,
    /// Files written by the command
    pub outputs: Vec<PathBuf>,
    pub processing_time: Duration,
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` wins over `log_level`, which is the configured level after
/// command-line overrides.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sales_analytics={}", log_level)));

    let result = if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using the layered approach (defaults -> file -> env -> args)
///
/// Without an explicit config file the default location is used when it exists.
pub fn load_configuration(
    config_file: Option<&Path>,
    input_path: Option<PathBuf>,
    output_dir: Option<PathBuf>,
) -> Result<Config> {
    let default_config_path = if config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = config_file.or_else(|| {
        default_config_path
            .as_deref()
            .filter(|path| path.exists())
    });

    match config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => info!("No config file found, using defaults and environment variables"),
    }

    Config::load_layered(input_path, output_dir, config_file)
}

/// Apply catalog flags to configuration
///
/// Choosing a catalog source on the command line also resets the key strategy
/// to that source's default unless a strategy is given too.
pub fn apply_catalog_overrides(config: &mut Config, selection: &CatalogSelection) {
    if let Some(source) = selection.source {
        config.catalog.source = source;
        config.catalog.key_strategy = None;
    }
    if let Some(url) = &selection.url {
        config.catalog.base_url = url.clone();
        // A catalog URL only makes sense for the HTTP catalog
        if selection.source.is_none() {
            config.catalog.source = CatalogSource::Http;
            config.catalog.key_strategy = None;
        }
    }
    if let Some(strategy) = selection.key_strategy {
        config.catalog.key_strategy = Some(strategy);
    }
}

/// Apply process command flags to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &ProcessArgs) {
    apply_catalog_overrides(config, &args.catalog);

    if let Some(top_n) = args.top_n {
        config.analytics.top_n = top_n;
    }
    if let Some(ranking) = args.rank_by {
        config.analytics.product_ranking = ranking;
    }
    if let Some(threshold) = args.low_threshold {
        config.analytics.low_performer_threshold = threshold;
    }
    if !args.show_progress() {
        config.processing.show_progress = false;
    }

    apply_log_level_override(config, args.get_log_level());
}

/// Replace the configured log level when one was given on the command line
pub fn apply_log_level_override(config: &mut Config, level: Option<&str>) {
    if let Some(level) = level {
        config.logging.level = level.to_string();
    }
}

/// Read and parse the configured input file
pub async fn read_input(config: &Config) -> Result<ParseResult> {
    let input_path = &config.processing.input_path;
    info!("Reading sales data from {}", input_path.display());

    let result = RecordParser::new().parse_file(input_path).await?;
    if result.header.is_empty() {
        return Err(Error::data_validation(format!(
            "Input file has no header line: {}",
            input_path.display()
        )));
    }

    Ok(result)
}
