//! Catalog command implementation
//!
//! Builds the configured product catalog and reports whether it is usable.

use super::shared::{
    RunStats, apply_catalog_overrides, apply_log_level_override, load_configuration,
    setup_logging,
};
use crate::Result;
use crate::app::services::product_catalog::build_catalog;
use crate::cli::args::CatalogArgs;
use colored::*;
use std::time::Instant;
use tracing::info;

/// Catalog command runner
///
/// An unavailable catalog is reported, not treated as a failure, matching how
/// the process command degrades.
pub async fn run_catalog(args: CatalogArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    let mut config = load_configuration(args.config_file.as_deref(), None, None)?;
    apply_catalog_overrides(&mut config, &args.catalog);
    apply_log_level_override(&mut config, args.get_log_level());
    setup_logging(&config.logging.level, false)?;

    config.validate()?;

    info!("Checking {:?} product catalog", config.catalog.source);
    let catalog = build_catalog(&config.catalog).await;
    let status = catalog.status();

    let label = if status.available {
        "available".bright_green().bold()
    } else {
        "unavailable".bright_red().bold()
    };
    println!("\n{} {}", "Product catalog:".bright_white().bold(), label);
    println!("   • {}", status.message);
    println!("   • Products available: {}", status.products_available);
    println!(
        "   • Key strategy: {:?}",
        config.catalog.effective_key_strategy()
    );
    println!();

    Ok(RunStats {
        catalog_products: status.products_available,
        processing_time: start_time.elapsed(),
        ..RunStats::default()
    })
}
