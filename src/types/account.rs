//! Account-related types for the account ledger
//!
//! This module defines the Account structure, the closed set of account
//! types, and the validation rules applied to account numbers, passwords
//! and monetary amounts before they reach an account.

use super::error::LedgerError;
use rand::Rng;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Account identifier
///
/// Exactly [`ACCOUNT_NUMBER_LEN`] ASCII digits, assigned at creation.
pub type AccountNumber = String;

/// Number of digits in a generated account number
pub const ACCOUNT_NUMBER_LEN: usize = 10;

/// Number of decimal places balances are stored and persisted with
pub const BALANCE_SCALE: u32 = 2;

/// Kind of account
///
/// The type is fixed for the lifetime of the account and carries no
/// behavior of its own; it is stored and reported as a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountType {
    Personal,
    Business,
}

impl AccountType {
    /// The tag written to the backing store
    pub fn tag(&self) -> &'static str {
        match self {
            AccountType::Personal => "Personal",
            AccountType::Business => "Business",
        }
    }

    /// Parse a persisted tag
    ///
    /// Only the exact tags `Personal` and `Business` are accepted here; user
    /// input goes through [`FromStr`], which is case-insensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Personal" => Some(AccountType::Personal),
            "Business" => Some(AccountType::Business),
            _ => None,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for AccountType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "personal" => Ok(AccountType::Personal),
            "business" => Ok(AccountType::Business),
            _ => Err(LedgerError::invalid_account_type(s)),
        }
    }
}

/// A single monetary account
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Unique identifier, immutable once assigned
    pub account_number: AccountNumber,

    /// Current balance
    ///
    /// Never driven below zero by a withdrawal or the debit side of a
    /// transfer.
    pub balance: Decimal,

    /// Personal or Business
    pub account_type: AccountType,

    /// Digit-only password, compared by equality
    pub password: String,
}

impl Account {
    pub fn new(
        account_number: AccountNumber,
        balance: Decimal,
        account_type: AccountType,
        password: String,
    ) -> Self {
        Account {
            account_number,
            balance,
            account_type,
            password,
        }
    }
}

/// Generate a random account number of [`ACCOUNT_NUMBER_LEN`] digits
///
/// Leading zeros are allowed. Collisions with existing accounts are not
/// checked here; see [`crate::core::Ledger::create_account`].
pub fn generate_account_number<R: Rng + ?Sized>(rng: &mut R) -> AccountNumber {
    (0..ACCOUNT_NUMBER_LEN)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

/// Check that a string has the shape of an account number
pub fn is_valid_account_number(number: &str) -> bool {
    number.len() == ACCOUNT_NUMBER_LEN && number.bytes().all(|b| b.is_ascii_digit())
}

/// Validate a password supplied at account creation
///
/// # Errors
///
/// Returns `InvalidPassword` if the password is empty or contains anything
/// other than ASCII digits.
pub fn validate_password(password: &str) -> Result<(), LedgerError> {
    if password.is_empty() {
        return Err(LedgerError::invalid_password("password must not be empty"));
    }
    if !password.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LedgerError::invalid_password("password must be numeric"));
    }
    Ok(())
}

/// Validate an amount moved by a deposit, withdrawal or transfer
///
/// The amount must be strictly positive and representable with
/// [`BALANCE_SCALE`] decimal places.
pub fn validate_amount(amount: Decimal, operation: &str) -> Result<Decimal, LedgerError> {
    if amount <= Decimal::ZERO || amount.normalize().scale() > BALANCE_SCALE {
        return Err(LedgerError::invalid_amount(amount, operation));
    }
    Ok(amount)
}

/// Validate the opening balance of a new account
///
/// Same as [`validate_amount`] except that zero is allowed.
pub fn validate_initial_deposit(amount: Decimal) -> Result<Decimal, LedgerError> {
    if amount.is_zero() {
        return Ok(Decimal::ZERO);
    }
    validate_amount(amount, "initial deposit")
}
