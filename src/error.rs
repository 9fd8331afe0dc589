//! Error handling types for mdexpand
//!
//! Absence of structure at the cursor is never an error; these types only
//! describe upstream (parse) failures, cancellation and configuration problems.

use std::time::Duration;
use thiserror::Error;

/// Failure of a selection-range request.
///
/// Every variant originates upstream of the range builders: the builders
/// themselves express "nothing found" as an empty result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The parser did not produce a syntax tree
    #[error("Parse failed: {message}")]
    Parse { message: String },

    /// Parsing did not finish within the configured timeout
    #[error("Parse timed out after {timeout:?}")]
    ParseTimeout { timeout: Duration },

    /// The blocking parse task panicked or was aborted
    #[error("Parse task failed: {0}")]
    TaskFailed(String),

    /// The request was cancelled before both sources completed
    #[error("Request cancelled")]
    Cancelled,
}

impl SelectionError {
    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        SelectionError::Parse {
            message: message.into(),
        }
    }
}

/// Result type for selection operations
pub type SelectionResult<T> = Result<T, SelectionError>;

/// Failure to read or decode a configuration source.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),
}
