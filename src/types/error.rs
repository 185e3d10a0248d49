//! Error types for the account ledger
//!
//! This module defines all error types that can occur while loading, mutating
//! and persisting accounts. Errors are designed to be descriptive and
//! user-friendly for CLI output; the library never prints them itself.
//!
//! # Error Categories
//!
//! - **Storage Errors**: I/O failures and corrupt persisted records
//! - **Lookup Errors**: Unknown account numbers, credential mismatches
//! - **Operation Errors**: Insufficient funds, invalid amounts, arithmetic overflow
//! - **Creation Errors**: Non-numeric passwords, unknown account types

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger
///
/// Every variant is recoverable at the boundary. A `MalformedRecord` raised
/// while loading aborts the load rather than dropping the record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// A persisted line could not be decoded into an account
    #[error("Malformed record{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    MalformedRecord {
        /// Line number in the backing store (if known)
        line: Option<u64>,
        /// Description of the decoding failure
        message: String,
    },

    /// No account with the given number exists
    #[error("Account {account_number} not found")]
    AccountNotFound {
        /// The account number that was looked up
        account_number: String,
    },

    /// Account number and password do not match any account
    #[error("Invalid credentials for account {account_number}")]
    AuthFailed {
        /// The account number that failed authentication
        account_number: String,
    },

    /// Withdrawal or transfer exceeds the account balance
    ///
    /// The account state remains unchanged.
    #[error("Insufficient funds in account {account_number}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account that would be overdrawn
        account_number: String,
        /// Current balance
        balance: Decimal,
        /// Requested amount
        requested: Decimal,
    },

    /// Password supplied at creation is not a digit string
    #[error("Invalid password: {reason}")]
    InvalidPassword {
        /// Why the password was rejected
        reason: String,
    },

    /// Account type tag is neither Personal nor Business
    #[error("Invalid account type '{tag}' (expected personal or business)")]
    InvalidAccountType {
        /// The unrecognized tag
        tag: String,
    },

    /// Amount is negative, zero where not allowed, or too precise
    #[error("Invalid amount {amount} for {operation}")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
        /// Operation that rejected it
        operation: String,
    },

    /// Balance arithmetic would overflow
    #[error("Arithmetic overflow in {operation} for account {account_number}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account being updated
        account_number: String,
    },

    /// I/O error while reading or writing the backing store
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        match error.into_kind() {
            csv::ErrorKind::Io(io_error) => io_error.into(),
            kind => LedgerError::MalformedRecord {
                line,
                message: format!("{:?}", kind),
            },
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create a MalformedRecord error
    pub fn malformed_record(line: Option<u64>, message: impl Into<String>) -> Self {
        LedgerError::MalformedRecord {
            line,
            message: message.into(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account_number: &str) -> Self {
        LedgerError::AccountNotFound {
            account_number: account_number.to_string(),
        }
    }

    /// Create an AuthFailed error
    pub fn auth_failed(account_number: &str) -> Self {
        LedgerError::AuthFailed {
            account_number: account_number.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account_number: &str, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            account_number: account_number.to_string(),
            balance,
            requested,
        }
    }

    /// Create an InvalidPassword error
    pub fn invalid_password(reason: &str) -> Self {
        LedgerError::InvalidPassword {
            reason: reason.to_string(),
        }
    }

    /// Create an InvalidAccountType error
    pub fn invalid_account_type(tag: &str) -> Self {
        LedgerError::InvalidAccountType {
            tag: tag.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal, operation: &str) -> Self {
        LedgerError::InvalidAmount {
            amount,
            operation: operation.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account_number: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account_number: account_number.to_string(),
        }
    }

    /// Attach a line number to a MalformedRecord error that lacks one
    pub fn at_line(self, line: u64) -> Self {
        match self {
            LedgerError::MalformedRecord { line: None, message } => LedgerError::MalformedRecord {
                line: Some(line),
                message,
            },
            other => other,
        }
    }
}
