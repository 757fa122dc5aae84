//! Sequential batch scan over a balance source.
//!
//! Batches are requested strictly in input order, one at a time, with a
//! fixed pause between consecutive requests. The pause respects the
//! endpoint's externally imposed rate limits; it is not a retry or
//! backoff computation.

use std::io::Write;
use std::thread;
use std::time::Duration;

use log::debug;

use crate::balances::BalanceSource;
use crate::error::{ScanError, ScanResult};

/// Batch settings for a scan run
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Maximum addresses submitted per API call
    pub batch_size: usize,
    /// Pause between consecutive batch requests
    pub batch_delay: Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            batch_size: 100,
            batch_delay: Duration::from_millis(1500),
        }
    }
}

/// Counters from a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Batches requested
    pub batches: usize,
    /// Addresses with a balance line
    pub reported: usize,
    /// Addresses the API returned no row for
    pub missing: usize,
}

/// Drives the batch loop over a balance source.
///
/// The report goes to any `io::Write` sink, so the exact output is
/// assertable without capturing process stdout.
pub struct Scanner<S> {
    source: S,
    config: ScanConfig,
}

impl<S: BalanceSource> Scanner<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, ScanConfig::default())
    }

    pub fn with_config(source: S, config: ScanConfig) -> Self {
        Self { source, config }
    }

    /// Scan `addresses`, pausing with `thread::sleep` between batches.
    pub fn run(&self, addresses: &[String], out: &mut impl Write) -> ScanResult<ScanSummary> {
        self.run_paced(addresses, out, thread::sleep)
    }

    /// Scan with a caller-supplied pause hook between batches.
    ///
    /// The hook runs once after every batch except the last. A fetch
    /// error aborts the run; remaining batches are not attempted. An
    /// address the response omits gets a no-data line and the run
    /// continues.
    pub fn run_paced(
        &self,
        addresses: &[String],
        out: &mut impl Write,
        mut pause: impl FnMut(Duration),
    ) -> ScanResult<ScanSummary> {
        if addresses.is_empty() {
            return Err(ScanError::NoValidAddresses);
        }

        let batch_size = self.config.batch_size.max(1);
        let total_batches = addresses.len().div_ceil(batch_size);
        let mut summary = ScanSummary::default();

        for (index, batch) in addresses.chunks(batch_size).enumerate() {
            writeln!(
                out,
                "Checking batch {} ({} addresses)...",
                index + 1,
                batch.len()
            )?;

            let balances = self.source.fetch_batch(batch)?;
            debug!("batch {}: {} rows returned", index + 1, balances.len());

            for address in batch {
                match balances.get(address) {
                    Some(record) => {
                        writeln!(out, "{}: confirmed balance = {} BTC", address, record.as_btc())?;
                        summary.reported += 1;
                    }
                    None => {
                        writeln!(out, "{}: No data returned", address)?;
                        summary.missing += 1;
                    }
                }
            }

            summary.batches += 1;
            if index + 1 < total_batches {
                pause(self.config.batch_delay);
            }
        }

        Ok(summary)
    }
}
