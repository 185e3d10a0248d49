//! Ledger store: durable copy of every account
//!
//! The store is read in full at the start of a session and rewritten in full
//! after every mutating action. There are no appends or partial updates.
//!
//! # Implementations
//!
//! - [`FileStore`] - plain text file, one record per line, rewritten through a
//!   sibling temp file and a rename so readers never see a half-written ledger
//! - [`MemoryStore`] - the same text held in memory, for tests and tools that
//!   must not touch the filesystem
//!
//! # Concurrency
//!
//! A store assumes it is the only writer. Two processes sharing one file will
//! lose updates (the last `save` wins).

use crate::io::record_codec::{decode, decode_fields, encode, encode_fields};
use crate::types::{Account, LedgerError};
use csv::{QuoteStyle, ReaderBuilder, Trim, WriterBuilder};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default file name of the backing store
pub const DEFAULT_LEDGER_FILE: &str = "accounts.txt";

/// Persistence primitive for the whole set of accounts
pub trait AccountStore {
    /// Read every account, in stored order
    ///
    /// A store that has never been written is an empty ledger, not an error.
    ///
    /// # Errors
    ///
    /// Returns `MalformedRecord` if any record is corrupt; no records are
    /// silently dropped. Returns `Io` if the store exists but cannot be read.
    fn load(&self) -> Result<Vec<Account>, LedgerError>;

    /// Replace the stored contents with `accounts`, preserving their order
    fn save(&mut self, accounts: &[Account]) -> Result<(), LedgerError>;
}

/// File-backed store
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling path used while rewriting the store
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from(DEFAULT_LEDGER_FILE));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_records(path: &Path, records: &[[String; 4]]) -> Result<(), LedgerError> {
        let file = File::create(path)?;

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .from_writer(file);

        for record in records {
            writer.write_record(record)?;
        }
        writer.flush()?;

        // Sync to disk before the rename makes the new contents visible
        let file = writer
            .into_inner()
            .map_err(|e| LedgerError::from(e.into_error()))?;
        file.sync_all()?;

        Ok(())
    }
}

impl AccountStore for FileStore {
    fn load(&self) -> Result<Vec<Account>, LedgerError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "ledger file absent, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        // Quotes carry no meaning in this format; blank lines are skipped
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .from_reader(file);

        let mut accounts = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|pos| pos.line());
            let account = decode_fields(record.iter()).map_err(|e| match line {
                Some(line) => e.at_line(line),
                None => e,
            })?;
            accounts.push(account);
        }

        debug!(path = %self.path.display(), count = accounts.len(), "loaded ledger");
        Ok(accounts)
    }

    fn save(&mut self, accounts: &[Account]) -> Result<(), LedgerError> {
        // Encode everything up front so a bad record never truncates the store
        let records = accounts
            .iter()
            .map(encode_fields)
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.temp_path();
        let result = Self::write_records(&temp_path, &records)
            .and_then(|()| fs::rename(&temp_path, &self.path).map_err(LedgerError::from));

        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result?;

        debug!(path = %self.path.display(), count = accounts.len(), "saved ledger");
        Ok(())
    }
}

/// In-memory store holding the persisted text
///
/// `None` models a store that has never been written.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    contents: Option<String>,
}

impl MemoryStore {
    /// An empty store that has never been written
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with persisted text
    pub fn from_text(text: impl Into<String>) -> Self {
        MemoryStore {
            contents: Some(text.into()),
        }
    }

    /// The persisted text, if the store has been written
    pub fn text(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl AccountStore for MemoryStore {
    fn load(&self) -> Result<Vec<Account>, LedgerError> {
        let Some(text) = self.contents.as_deref() else {
            return Ok(Vec::new());
        };

        text.lines()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(index, line)| decode(line).map_err(|e| e.at_line(index as u64 + 1)))
            .collect()
    }

    fn save(&mut self, accounts: &[Account]) -> Result<(), LedgerError> {
        let text = accounts
            .iter()
            .map(encode)
            .collect::<Result<String, _>>()?;
        self.contents = Some(text);
        Ok(())
    }
}
