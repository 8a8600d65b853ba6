//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `whoispf` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the result table (or usage when there is nothing to look up)
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use whoispf::config::{normalize_flag_args, USAGE};
use whoispf::initialization::init_logger_with;
use whoispf::{render_table, run_lookup, Config, RunError, TableStyle};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Accept the historical single-dash spellings (-spf, -plain, -verbose)
    let config = Config::parse_from(normalize_flag_args(std::env::args()));

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_lookup(&config).await {
        Ok(report) => {
            println!(
                "{}",
                render_table(&report.records, TableStyle::from_plain_flag(config.plain))
            );
            Ok(())
        }
        Err(RunError::NoTargets) => {
            eprintln!("{USAGE}");
            process::exit(1);
        }
        Err(e) => Err(e).context("Failed to set up whois lookups"),
    }
}
