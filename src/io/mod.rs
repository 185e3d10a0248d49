//! I/O module
//!
//! Handles the persisted text format and the stores that hold it.
//!
//! # Components
//!
//! - `record_codec` - one account to and from one delimited line
//! - `ledger_store` - whole-ledger load and save (file and in-memory)

pub mod ledger_store;
pub mod record_codec;

pub use ledger_store::{AccountStore, FileStore, MemoryStore, DEFAULT_LEDGER_FILE};
pub use record_codec::{decode, encode, format_balance};
