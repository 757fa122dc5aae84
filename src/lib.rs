//! Batch balance checking for legacy Bitcoin addresses.
//!
//! Reads a JSON array of addresses, keeps the ones matching the legacy
//! (`1...`/`3...`) shape, and reports each confirmed balance from the
//! blockchain.info batch endpoint, at most 100 addresses per request with
//! a fixed pause between requests.
//!
//! # Pipeline
//!
//! - **input**: load and parse the address file
//! - **address**: shape validation and the warn-and-skip filter
//! - **balances**: wire types and the HTTP balance source
//! - **scan**: the sequential batch loop
//! - **error**: the fatal error channel
//!
//! # Example
//!
//! ```rust,ignore
//! use satscan::{BlockchainInfoClient, Scanner};
//!
//! let client = BlockchainInfoClient::from_env()?;
//! let scanner = Scanner::new(client);
//! let summary = scanner.run(&addresses, &mut std::io::stdout().lock())?;
//! println!("{} addresses reported", summary.reported);
//! ```

pub mod address;
pub mod balances;
pub mod error;
pub mod input;
pub mod scan;

// Re-export the pipeline surface for convenience
pub use address::{filter_valid, is_legacy_address};
pub use balances::{BalanceMap, BalanceRecord, BalanceSource, BlockchainInfoClient};
pub use error::{ScanError, ScanResult};
pub use input::load_entries;
pub use scan::{ScanConfig, ScanSummary, Scanner};
