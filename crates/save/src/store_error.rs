// ---------------------------------------------------------------------------
// StoreError: error type for scenario library persistence
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors raised by key-value backends and the scenario library.
#[derive(Debug)]
pub enum StoreError {
    /// I/O error from a file-backed store.
    Io(std::io::Error),
    /// Stored or imported document is not valid JSON for its shape.
    Json(serde_json::Error),
    /// Import payload is valid JSON but not an array of scenarios.
    InvalidFormat(String),
    /// Key cannot be mapped to a file name.
    InvalidKey(String),
    /// The baseline scenario cannot be deleted.
    BaselineProtected { id: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "I/O error: {e}"),
            StoreError::Json(e) => write!(f, "JSON error: {e}"),
            StoreError::InvalidFormat(msg) => write!(f, "Invalid format: {msg}"),
            StoreError::InvalidKey(key) => write!(f, "Invalid storage key: '{key}'"),
            StoreError::BaselineProtected { id } => {
                write!(f, "Scenario '{id}' is the baseline and cannot be deleted")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}
