//! CLI errors.

use thiserror::Error;

/// Errors surfaced by the `teamlink` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Failed to read input or resolve the working directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input was not a valid record for the chosen command.
    #[error("Invalid {record} record: {source}")]
    InvalidRecord {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to encode the output record.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
