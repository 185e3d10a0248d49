//! Ledger session service
//!
//! This module provides the `Ledger` that ties the account registry to a
//! store. It is the surface the command-line shell calls into:
//!
//! - The registry is loaded from the store when the ledger is opened
//! - Every mutating operation rewrites the whole store before returning
//! - A failed save restores the registry to its state before the operation,
//!   so memory and store never disagree after an error
//!
//! The store is injected, so tests can run against a [`MemoryStore`] or a
//! file in a temporary directory.
//!
//! [`MemoryStore`]: crate::io::MemoryStore

use crate::core::operations;
use crate::core::registry::AccountRegistry;
use crate::io::AccountStore;
use crate::types::{Account, AccountType, LedgerError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use tracing::{info, warn};

/// One session over a store
///
/// `R` is the random source used for new account numbers.
pub struct Ledger<S: AccountStore, R: Rng = StdRng> {
    store: S,
    registry: AccountRegistry,
    rng: R,
}

impl<S: AccountStore> Ledger<S, StdRng> {
    /// Open a ledger, loading every account from `store`
    ///
    /// # Errors
    ///
    /// Returns `MalformedRecord` if the store holds a corrupt record, or `Io`
    /// if it cannot be read.
    pub fn open(store: S) -> Result<Self, LedgerError> {
        Self::open_with_rng(store, StdRng::from_entropy())
    }
}

impl<S: AccountStore, R: Rng> Ledger<S, R> {
    /// Open a ledger with an explicit random source
    pub fn open_with_rng(store: S, rng: R) -> Result<Self, LedgerError> {
        let registry = AccountRegistry::from_accounts(store.load()?);
        Ok(Ledger {
            store,
            registry,
            rng,
        })
    }

    /// All accounts in stored order
    pub fn accounts(&self) -> &[Account] {
        self.registry.accounts()
    }

    pub fn registry(&self) -> &AccountRegistry {
        &self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persist the current registry
    pub fn save(&mut self) -> Result<(), LedgerError> {
        self.store.save(self.registry.accounts())
    }

    /// Create and persist a new account
    ///
    /// `account_type` is matched case-insensitively against `personal` and
    /// `business`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account type is unknown (`InvalidAccountType`)
    /// - The password is not all digits (`InvalidPassword`)
    /// - The initial deposit is negative or too precise (`InvalidAmount`)
    /// - The store cannot be written
    pub fn create_account(
        &mut self,
        account_type: &str,
        initial_deposit: Decimal,
        password: &str,
    ) -> Result<Account, LedgerError> {
        let account_type: AccountType = account_type.parse()?;

        let account = self.commit("create", |registry, rng| {
            let account =
                operations::create_account(registry, account_type, initial_deposit, password, rng)?;
            registry.insert(account.clone());
            Ok(account)
        })?;

        info!(
            account_number = %account.account_number,
            account_type = %account.account_type,
            "created account"
        );
        Ok(account)
    }

    /// Log in to an account
    ///
    /// # Errors
    ///
    /// Returns `AuthFailed` unless both number and password match.
    pub fn authenticate(&self, account_number: &str, password: &str) -> Result<&Account, LedgerError> {
        self.registry.authenticate(account_number, password)
    }

    /// Balance of an authenticated account
    pub fn balance(&self, account_number: &str, password: &str) -> Result<Decimal, LedgerError> {
        Ok(self.authenticate(account_number, password)?.check_balance())
    }

    /// Deposit into an authenticated account and persist
    ///
    /// # Returns
    ///
    /// The new balance.
    pub fn deposit(
        &mut self,
        account_number: &str,
        password: &str,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        self.commit("deposit", |registry, _| {
            registry
                .authenticate_mut(account_number, password)?
                .deposit(amount)
        })
    }

    /// Withdraw from an authenticated account and persist
    ///
    /// # Returns
    ///
    /// The new balance.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientFunds` if the amount exceeds the balance; the
    /// account and the store are left unchanged.
    pub fn withdraw(
        &mut self,
        account_number: &str,
        password: &str,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        self.commit("withdraw", |registry, _| {
            registry
                .authenticate_mut(account_number, password)?
                .withdraw(amount)
        })
    }

    /// Transfer between two accounts and persist
    ///
    /// No password is required; both accounts are addressed by number.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if either number is unknown and
    /// `InsufficientFunds` if the sender cannot cover the amount.
    pub fn transfer(
        &mut self,
        sender: &str,
        recipient: &str,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        self.commit("transfer", |registry, _| {
            operations::transfer(registry, sender, recipient, amount)
        })?;

        info!(sender, recipient, %amount, "transfer completed");
        Ok(())
    }

    /// Delete an authenticated account and persist
    ///
    /// # Returns
    ///
    /// The removed account.
    ///
    /// # Errors
    ///
    /// Returns `AuthFailed` unless both number and password match.
    pub fn delete_account(
        &mut self,
        account_number: &str,
        password: &str,
    ) -> Result<Account, LedgerError> {
        let account = self.commit("delete", |registry, _| {
            registry.remove_authenticated(account_number, password)
        })?;

        info!(account_number, "deleted account");
        Ok(account)
    }

    /// Apply a mutation to the registry and persist the result
    ///
    /// If the mutation fails or the store rejects the save, the registry is
    /// put back as it was and the error is returned.
    fn commit<T, F>(&mut self, operation: &str, mutate: F) -> Result<T, LedgerError>
    where
        F: FnOnce(&mut AccountRegistry, &mut R) -> Result<T, LedgerError>,
    {
        let snapshot = self.registry.clone();

        let result = mutate(&mut self.registry, &mut self.rng)
            .and_then(|value| self.store.save(self.registry.accounts()).map(|()| value));

        if let Err(e) = &result {
            warn!(operation, error = %e, "operation rejected");
            self.registry = snapshot;
        }
        result
    }
}
