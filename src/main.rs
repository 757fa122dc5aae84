//! Batch Bitcoin balance checker.
//!
//! Reads a JSON array of addresses from the file given with `-f`/`--file`
//! and prints each confirmed balance, querying blockchain.info 100
//! addresses at a time.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::info;

use satscan::{filter_valid, load_entries, BlockchainInfoClient, ScanResult, ScanSummary, Scanner};

#[derive(Parser)]
#[command(version, about = "Check confirmed balances for a list of Bitcoin addresses")]
struct Cli {
    /// Path to a JSON file containing an array of Bitcoin addresses
    #[arg(short = 'f', long = "file")]
    file: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> ScanResult<ScanSummary> {
    let entries = load_entries(&cli.file)?;
    let addresses = filter_valid(entries);

    let client = BlockchainInfoClient::from_env()?;
    let scanner = Scanner::new(client);

    let stdout = io::stdout();
    let summary = scanner.run(&addresses, &mut stdout.lock())?;

    info!(
        "scan complete: {} batches, {} balances, {} without data",
        summary.batches, summary.reported, summary.missing
    );
    Ok(summary)
}
