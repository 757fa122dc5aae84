//! Balance Fetcher
//!
//! Fetches confirmed balances from the blockchain.info batch endpoint.
//! One GET covers a whole batch: `<base>?active=<addr1>|<addr2>|...`,
//! and the response is a JSON object keyed by address.

use std::collections::HashMap;
use std::env;
use std::time::Duration;

use log::debug;
use serde::Deserialize;

use crate::error::{ScanError, ScanResult};

// =============================================================================
// Wire Types
// =============================================================================

/// Default balance endpoint
pub const DEFAULT_API_BASE: &str = "https://blockchain.info/balance";

/// Environment variable overriding the endpoint base URL
pub const API_BASE_ENV: &str = "SATSCAN_API_BASE";

/// Satoshis per whole bitcoin
pub const SATS_PER_BTC: f64 = 100_000_000.0;

/// One result row from the balance endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceRecord {
    /// Confirmed balance in satoshis
    pub final_balance: u64,
    #[serde(default)]
    pub n_tx: u64,
    #[serde(default)]
    pub total_received: u64,
}

impl BalanceRecord {
    /// Confirmed balance in whole bitcoins
    pub fn as_btc(&self) -> f64 {
        self.final_balance as f64 / SATS_PER_BTC
    }
}

/// Response rows keyed by the requested address
pub type BalanceMap = HashMap<String, BalanceRecord>;

// =============================================================================
// Balance Source
// =============================================================================

/// One balance lookup covering a whole batch of addresses.
///
/// Implementations issue at most one outbound call per invocation and
/// never retry; the orchestrator treats any error as fatal.
pub trait BalanceSource {
    /// Fetch the balance rows for `addresses` in a single call.
    fn fetch_batch(&self, addresses: &[String]) -> ScanResult<BalanceMap>;
}

/// Blocking client for the blockchain.info balance endpoint
pub struct BlockchainInfoClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl BlockchainInfoClient {
    /// Client against the default endpoint, honoring `SATSCAN_API_BASE`.
    pub fn from_env() -> ScanResult<Self> {
        match env::var(API_BASE_ENV) {
            Ok(base) if !base.is_empty() => Self::with_base_url(base),
            _ => Self::with_base_url(DEFAULT_API_BASE),
        }
    }

    /// Client against an explicit endpoint base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> ScanResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| ScanError::Request(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn batch_url(&self, addresses: &[String]) -> String {
        format!("{}?active={}", self.base_url, addresses.join("|"))
    }
}

impl BalanceSource for BlockchainInfoClient {
    fn fetch_batch(&self, addresses: &[String]) -> ScanResult<BalanceMap> {
        let url = self.batch_url(addresses);
        debug!("requesting balances for {} addresses", addresses.len());

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| ScanError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ScanError::Request(format!(
                "server returned {}",
                response.status()
            )));
        }

        response
            .json()
            .map_err(|e| ScanError::Request(format!("Failed to parse balance response: {}", e)))
    }
}

// =============================================================================
// Tests
// =============================================================================
