//! Validate command implementation
//!
//! Parses and validates the input file and prints what would be rejected.
//! Nothing is written.

use super::shared::{
    RunStats, apply_log_level_override, load_configuration, read_input, setup_logging,
};
use crate::Result;
use crate::app::models::ValidationReason;
use crate::app::services::record_processor::{ValidationSummary, partition_records};
use crate::cli::args::ValidateArgs;
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

/// Validate command runner
pub async fn run_validate(args: ValidateArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    let mut config =
        load_configuration(args.config_file.as_deref(), args.input_path.clone(), None)?;
    apply_log_level_override(&mut config, args.get_log_level());
    setup_logging(&config.logging.level, false)?;

    info!("Starting transaction file validation");
    debug!("Validation arguments: {:?}", args);

    let parsed = read_input(&config).await?;
    let records_read = parsed.records.len();
    let parse_summary = parsed.stats.summary();

    let (valid, invalid) = partition_records(parsed.records);
    let summary = ValidationSummary::from_invalid(records_read, &invalid);

    println!(
        "\n{} {}",
        "Validation of".bright_green().bold(),
        config.processing.input_path.display().to_string().bright_white()
    );
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   • {}", parse_summary);
    println!(
        "   • Valid records: {}",
        summary.valid.to_string().bright_green().bold()
    );
    println!(
        "   • Invalid records: {}",
        if summary.invalid > 0 {
            summary.invalid.to_string().bright_red().bold()
        } else {
            summary.invalid.to_string().bright_white().bold()
        }
    );

    if summary.invalid > 0 {
        println!("\n{}", "Rejections by reason:".bright_yellow().bold());
        for reason in ValidationReason::ALL {
            let count = summary.count(reason);
            if count > 0 {
                println!("   • {}: {}", reason, count);
            }
        }

        println!("\n{}", "Invalid records:".bright_yellow().bold());
        for rejected in &invalid {
            println!(
                "   • line {}: {} - {}",
                rejected.record.line_number(),
                rejected.record.transaction_id().unwrap_or("N/A"),
                rejected.reason
            );
        }
    }
    println!();

    Ok(RunStats {
        records_read,
        valid_records: valid.len(),
        invalid_records: invalid.len(),
        processing_time: start_time.elapsed(),
        ..RunStats::default()
    })
}
