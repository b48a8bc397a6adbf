//! Command implementations for the sales analytics CLI
//!
//! Each command is implemented in its own module:
//! - `process`: Full pipeline writing the report and cleaned export
//! - `validate`: Parse and validate only
//! - `catalog`: Product catalog status check

pub mod catalog;
pub mod process;
pub mod shared;
pub mod validate;

pub use shared::RunStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner; dispatches to the subcommand handler
pub async fn run(args: Args) -> Result<RunStats> {
    match args.get_command() {
        Commands::Process(process_args) => process::run_process(process_args).await,
        Commands::Validate(validate_args) => validate::run_validate(validate_args).await,
        Commands::Catalog(catalog_args) => catalog::run_catalog(catalog_args).await,
    }
}
