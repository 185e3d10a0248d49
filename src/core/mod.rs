//! Core ledger logic
//!
//! - `registry` - in-memory accounts of one session
//! - `operations` - balance, deposit, withdrawal, transfer, creation
//! - `ledger` - session service that persists after every mutation

pub mod ledger;
pub mod operations;
pub mod registry;

pub use ledger::Ledger;
pub use registry::AccountRegistry;
