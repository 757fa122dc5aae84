//! Legacy Bitcoin address validation.
//!
//! Accepts the Base58Check shape only: P2PKH (`1...`) and P2SH (`3...`)
//! addresses. Bech32 (`bc1...`) addresses are out of scope and rejected,
//! as are testnet prefixes.

use log::warn;
use serde_json::Value;

/// Base58 alphabet shared by legacy Bitcoin addresses (no 0, O, I, l)
pub const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Check whether `token` has the shape of a legacy Bitcoin address.
///
/// Shape means a leading `1` or `3` followed by 25-34 base58 characters.
/// The Base58Check checksum is not verified, so a mistyped address that
/// keeps the shape still passes.
pub fn is_legacy_address(token: &str) -> bool {
    let tail = match token.strip_prefix(['1', '3']) {
        Some(tail) => tail,
        None => return false,
    };

    (25..=34).contains(&tail.len()) && tail.chars().all(|c| BASE58_ALPHABET.contains(c))
}

/// Keep the entries that look like legacy addresses, in input order.
///
/// Everything else (bad strings, non-string JSON values) is logged and
/// dropped. Deciding whether anything is left to scan belongs to the
/// caller.
pub fn filter_valid(entries: Vec<Value>) -> Vec<String> {
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::String(s) if is_legacy_address(&s) => Some(s),
            Value::String(s) => {
                warn!("Invalid Bitcoin address skipped: {}", s);
                None
            }
            other => {
                warn!("Invalid Bitcoin address skipped: {}", other);
                None
            }
        })
        .collect()
}
