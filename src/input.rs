//! Input list loading.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;

use crate::error::{ScanError, ScanResult};

/// Load the candidate entries from a JSON file.
///
/// The file must hold a single top-level array. Elements come back
/// uninterpreted so the address filter can warn about each bad entry on
/// its own; a non-string element is a skippable entry here, not a parse
/// error.
pub fn load_entries(path: &Path) -> ScanResult<Vec<Value>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ScanError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ScanError::Io {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let parsed: Value = serde_json::from_str(&raw)
        .map_err(|e| ScanError::MalformedInput(format!("invalid JSON: {}", e)))?;

    match parsed {
        Value::Array(entries) => Ok(entries),
        other => Err(ScanError::MalformedInput(format!(
            "top-level value is {}, expected an array",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
