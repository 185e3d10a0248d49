//! Runtime configuration
//!
//! Resolved from command-line options and their environment fallbacks by
//! [`CliArgs::to_config`](crate::cli::CliArgs::to_config).

use crate::io::{FileStore, DEFAULT_LEDGER_FILE};
use std::path::PathBuf;

/// Default tracing filter when neither `--log-level` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings for one run of the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Path of the backing store
    pub ledger_file: PathBuf,

    /// Tracing filter directive (e.g. `info`, `account_ledger=debug`)
    pub log_filter: String,
}

impl LedgerConfig {
    pub fn new(ledger_file: impl Into<PathBuf>, log_filter: impl Into<String>) -> Self {
        LedgerConfig {
            ledger_file: ledger_file.into(),
            log_filter: log_filter.into(),
        }
    }

    /// Store backed by the configured file
    pub fn file_store(&self) -> FileStore {
        FileStore::new(&self.ledger_file)
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig::new(DEFAULT_LEDGER_FILE, DEFAULT_LOG_FILTER)
    }
}
