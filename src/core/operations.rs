//! Account operations
//!
//! Balance queries, deposits, withdrawals, transfers and account creation.
//! Every operation either completes or fails without mutating anything:
//! amounts are validated and new balances are computed with checked
//! arithmetic before any account is written.

use crate::core::registry::AccountRegistry;
use crate::types::account::{
    generate_account_number, validate_amount, validate_initial_deposit, validate_password,
};
use crate::types::{Account, AccountType, LedgerError};
use rand::Rng;
use rust_decimal::Decimal;

impl Account {
    /// Current balance
    pub fn check_balance(&self) -> Decimal {
        self.balance
    }

    /// Credit funds to the account
    ///
    /// # Returns
    ///
    /// The new balance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is not positive or has more than two decimal places
    /// - Adding the amount would overflow
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, LedgerError> {
        let amount = validate_amount(amount, "deposit")?;

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", &self.account_number))?;

        Ok(self.balance)
    }

    /// Debit funds from the account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is not positive or has more than two decimal places
    /// - The amount exceeds the balance (`InsufficientFunds`)
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, LedgerError> {
        let amount = validate_amount(amount, "withdrawal")?;

        if amount > self.balance {
            return Err(LedgerError::insufficient_funds(
                &self.account_number,
                self.balance,
                amount,
            ));
        }

        // Cannot underflow: amount <= balance
        self.balance -= amount;

        Ok(self.balance)
    }
}

/// Move funds between two accounts of the registry
///
/// Both accounts are looked up first, then the sender's balance is checked.
/// A transfer from an account to itself succeeds and leaves the balance as
/// it was.
///
/// # Errors
///
/// Returns an error if:
/// - The amount is not positive or has more than two decimal places
/// - Either account number is unknown (`AccountNotFound`)
/// - The sender's balance does not cover the amount (`InsufficientFunds`)
/// - Crediting the recipient would overflow
pub fn transfer(
    registry: &mut AccountRegistry,
    sender: &str,
    recipient: &str,
    amount: Decimal,
) -> Result<(), LedgerError> {
    let amount = validate_amount(amount, "transfer")?;

    let sender_index = registry
        .position(sender)
        .ok_or_else(|| LedgerError::account_not_found(sender))?;
    let recipient_index = registry
        .position(recipient)
        .ok_or_else(|| LedgerError::account_not_found(recipient))?;

    let accounts = registry.accounts_mut();
    let sender_balance = accounts[sender_index].balance;

    if amount > sender_balance {
        return Err(LedgerError::insufficient_funds(sender, sender_balance, amount));
    }

    // Debit and credit of the same account cancel out
    if sender_index == recipient_index {
        return Ok(());
    }

    let recipient_balance = accounts[recipient_index]
        .balance
        .checked_add(amount)
        .ok_or_else(|| LedgerError::arithmetic_overflow("transfer", recipient))?;

    accounts[sender_index].balance = sender_balance - amount;
    accounts[recipient_index].balance = recipient_balance;

    Ok(())
}

/// Build a new account with a fresh number
///
/// The number is drawn from `rng` until it differs from every account in
/// `registry`. The account is returned, not inserted.
///
/// # Errors
///
/// Returns an error if:
/// - The password is empty or not all digits (`InvalidPassword`)
/// - The initial deposit is negative or has more than two decimal places
pub fn create_account<R: Rng + ?Sized>(
    registry: &AccountRegistry,
    account_type: AccountType,
    initial_deposit: Decimal,
    password: &str,
    rng: &mut R,
) -> Result<Account, LedgerError> {
    validate_password(password)?;
    let balance = validate_initial_deposit(initial_deposit)?;

    let account_number = loop {
        let candidate = generate_account_number(rng);
        if !registry.contains(&candidate) {
            break candidate;
        }
    };

    Ok(Account::new(
        account_number,
        balance,
        account_type,
        password.to_string(),
    ))
}
