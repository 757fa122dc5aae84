//! Error types for the balance-checking pipeline.
//!
//! Everything here is terminal: the binary reports the message on stderr
//! and exits non-zero. Skipping an invalid address is not an error at all;
//! that path lives in the filter and only logs.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a balance-checking run
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Input file must contain a JSON array of Bitcoin addresses: {0}")]
    MalformedInput(String),

    #[error("No valid Bitcoin addresses to check")]
    NoValidAddresses,

    #[error("API request failed: {0}")]
    Request(String),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;
