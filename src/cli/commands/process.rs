//! Process command implementation
//!
//! Runs the complete pipeline: configuration, parsing, validation, enrichment,
//! analytics, and writing the report and cleaned export.

use super::shared::{
    RunStats, apply_cli_overrides, load_configuration, read_input, setup_logging,
};
use crate::Result;
use crate::app::adapters::filesystem;
use crate::app::services::analytics::AnalyticsReport;
use crate::app::services::product_catalog::build_catalog;
use crate::app::services::record_processor::RecordProcessor;
use crate::app::services::report_writer::{
    ReportInput, format_money, render_cleaned_export, render_report,
};
use crate::cli::args::ProcessArgs;
use crate::config::Config;
use chrono::Local;
use colored::*;
use indicatif::HumanDuration;
use std::time::Instant;
use tracing::{debug, info};

/// Process command runner
///
/// 1. Load configuration and set up logging
/// 2. Parse the input file and build the product catalog
/// 3. Validate, clean and enrich records
/// 4. Compute analytics, render and write both outputs
pub async fn run_process(args: ProcessArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    args.validate()?;

    let mut config = load_configuration(
        args.config_file.as_deref(),
        args.input_path.clone(),
        args.output_dir.clone(),
    )?;
    apply_cli_overrides(&mut config, &args);

    setup_logging(&config.logging.level, args.quiet)?;

    info!("Starting sales analytics processing");
    debug!("Command line arguments: {:?}", args);

    config.validate()?;
    debug!("Loaded configuration: {:?}", config);

    let parsed = read_input(&config).await?;
    let records_read = parsed.records.len();

    let catalog = build_catalog(&config.catalog).await;
    let catalog_products = catalog.status().products_available;
    let processor = RecordProcessor::new(catalog, config.catalog.effective_key_strategy());
    let processing = processor.process_records(parsed.records, config.processing.show_progress);

    let analytics = AnalyticsReport::compute(&processing.records, &config.analytics);
    let report = render_report(&ReportInput {
        processing: &processing,
        analytics: &analytics,
        config: &config.analytics,
        generated_at: Local::now().naive_local(),
    });
    let export = render_cleaned_export(&processing.records);

    if args.print_report {
        println!("{}", report);
    }

    let report_path = config.report_path();
    let cleaned_path = config.cleaned_data_path();
    filesystem::write_text(&report_path, &report).await?;
    filesystem::write_text(&cleaned_path, &export).await?;
    info!(
        "Wrote {} and {}",
        report_path.display(),
        cleaned_path.display()
    );

    let stats = RunStats {
        records_read,
        valid_records: processing.stats.valid,
        invalid_records: processing.stats.invalid,
        records_enriched: processing.stats.matched,
        catalog_products,
        outputs: vec![report_path, cleaned_path],
        processing_time: start_time.elapsed(),
    };

    if !args.quiet {
        print_summary(&config, &analytics, &stats);
    }

    Ok(stats)
}

/// Print a colored run summary to stdout
fn print_summary(config: &Config, analytics: &AnalyticsReport, stats: &RunStats) {
    println!("\n{}", "Sales Analytics Complete".bright_green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "   • Input: {}",
        config.processing.input_path.display().to_string().bright_white()
    );
    println!(
        "   • Records: {} read, {} valid, {} invalid",
        stats.records_read.to_string().bright_white().bold(),
        stats.valid_records.to_string().bright_green().bold(),
        if stats.invalid_records > 0 {
            stats.invalid_records.to_string().bright_red().bold()
        } else {
            stats.invalid_records.to_string().bright_white().bold()
        }
    );
    println!(
        "   • Enriched: {}/{} ({:.2}%)",
        stats.records_enriched,
        stats.valid_records,
        analytics.enrichment.success_rate
    );
    println!(
        "   • Total revenue: {}",
        format_money(analytics.overall.total_revenue)
            .bright_yellow()
            .bold()
    );
    println!(
        "   • Processing time: {}",
        HumanDuration(stats.processing_time)
    );

    println!("\n{}", "Output Files:".bright_green().bold());
    for path in &stats.outputs {
        println!("   • {}", path.display());
    }
    println!();
}
