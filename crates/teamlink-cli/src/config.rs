//! CLI configuration.

use std::path::PathBuf;

/// Resolved global options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File to read the input record from. Stdin when unset.
    pub input: Option<PathBuf>,

    /// Pretty-print JSON output.
    pub pretty: bool,

    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            pretty: true,
            log_level: "warn".to_string(),
        }
    }
}
