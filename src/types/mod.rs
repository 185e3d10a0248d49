//! Types module
//!
//! Contains core data structures used throughout the application.
//! - `account`: Account, account types and input validation
//! - `error`: Error types for the ledger

pub mod account;
pub mod error;

pub use account::{Account, AccountNumber, AccountType};
pub use error::LedgerError;
