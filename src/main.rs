use clap::Parser;
use sales_analytics::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        let shutdown_signal = async {
            if tokio::signal::ctrl_c().await.is_err() {
                // No signal handler available; never resolve
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            result = commands::run(args) => result,
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(sales_analytics::Error::processing_interrupted(
                    "Processing interrupted by user",
                ))
            }
        }
    });

    match result {
        Ok(_stats) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Sales Analytics - Transaction Validation, Enrichment and Reporting");
    println!("==================================================================");
    println!();
    println!("Validate pipe-delimited sales transactions, enrich them with product");
    println!("catalog metadata and write a text report plus a cleaned data export.");
    println!();
    println!("USAGE:");
    println!("    sales_analytics <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Run the full pipeline and write outputs (main command)");
    println!("    validate    Parse and validate a file without writing anything");
    println!("    catalog     Check that the product catalog is reachable");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Process data/sales_data.txt into output/:");
    println!("    sales_analytics process");
    println!();
    println!("    # Enrich from the HTTP catalog and rank products by units sold:");
    println!("    sales_analytics process -i sales.txt --catalog http --rank-by quantity");
    println!();
    println!("    # List rejected records:");
    println!("    sales_analytics validate -i sales.txt");
    println!();
    println!("For detailed help on any command, use:");
    println!("    sales_analytics <COMMAND> --help");
}
