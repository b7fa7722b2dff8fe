//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ns_provider` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ns_provider::config::{Cli, Command};
use ns_provider::domain::combine_domains;
use ns_provider::initialization::init_logger_with;
use ns_provider::{run_lookup, run_server};

#[tokio::main]
async fn main() -> Result<()> {
    // NS_PROVIDER_* settings may come from a .env file next to the working directory
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let outcome = match cli.command {
        Command::Serve(args) => run_server(args.into()).await,
        Command::Lookup(args) => run_lookup(args.into()).await.map(|report| {
            println!(
                "✅ Processed {} domain{} ({} resolved, {} failed) in {:.1}s",
                report.total_domains,
                if report.total_domains == 1 { "" } else { "s" },
                report.resolved,
                report.failed,
                report.elapsed_seconds
            );
            println!("Results written to {}", report.output.display());
        }),
        Command::Combine(args) => {
            combine_domains(&args.input_csv, &args.output, args.append).map(|report| {
                println!("Domains written to output file: {}", report.written);
                if args.append {
                    println!("Duplicates skipped: {}", report.duplicates_skipped);
                } else {
                    println!("Total unique domains in output file: {}", report.written);
                }
            })
        }
    };

    if let Err(e) = outcome {
        eprintln!("ns_provider error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
