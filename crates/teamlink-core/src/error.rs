//! Core domain errors.

use thiserror::Error;

/// Core domain errors for TeamLink.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A status string that is not part of the enumeration.
    #[error("Unknown {kind} status: '{value}'")]
    UnknownStatus { kind: &'static str, value: String },
}
