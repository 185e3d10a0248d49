//! Account Ledger Library
//! # Overview
//!
//! This library keeps a small set of monetary accounts in a plain text file:
//! one comma-delimited record per account, read in full at the start of a
//! session and rewritten in full after every change.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, AccountType, LedgerError)
//! - [`io`] - Persisted format:
//!   - [`io::record_codec`] - One account to and from one text line
//!   - [`io::ledger_store`] - Whole-ledger load and save
//! - [`core`] - Business logic components:
//!   - [`core::registry`] - Accounts of one session, lookup and authentication
//!   - [`core::operations`] - Balance, deposit, withdrawal, transfer, creation
//!   - [`core::ledger`] - Session service persisting after every mutation
//! - [`cli`] - Command-line arguments and command execution
//! - [`config`] - Run configuration
//! - [`logging`] - Tracing subscriber setup
//!
//! # Record Format
//!
//! ```text
//! <account_number>,<balance>,<account_type>,<password>
//! 0123456789,150.00,Personal,1234
//! ```
//!
//! - `account_number`: 10 ASCII digits
//! - `balance`: decimal with two places
//! - `account_type`: `Personal` or `Business`
//! - `password`: ASCII digits, stored in clear text
//!
//! A missing file is an empty ledger.
//!
//! # Example
//!
//! ```
//! use account_ledger::{Ledger, MemoryStore};
//! use rust_decimal::Decimal;
//!
//! let mut ledger = Ledger::open(MemoryStore::new()).unwrap();
//! let account = ledger
//!     .create_account("personal", Decimal::new(100, 0), "1234")
//!     .unwrap();
//! let balance = ledger
//!     .deposit(&account.account_number, "1234", Decimal::new(50, 0))
//!     .unwrap();
//! assert_eq!(balance, Decimal::new(150, 0));
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod logging;
pub mod types;

pub use config::LedgerConfig;
pub use core::{AccountRegistry, Ledger};
pub use io::{AccountStore, FileStore, MemoryStore};
pub use types::{Account, AccountNumber, AccountType, LedgerError};
