//! Account registry
//!
//! This module provides the `AccountRegistry` struct which holds every account
//! of a session in stored order. Lookups are linear scans returning the first
//! match; account numbers are assumed unique but nothing here enforces it.

use crate::types::{Account, LedgerError};

/// In-memory collection of the accounts of one session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from loaded accounts, keeping their order
    pub fn from_accounts(accounts: Vec<Account>) -> Self {
        AccountRegistry { accounts }
    }

    /// All accounts in stored order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn contains(&self, account_number: &str) -> bool {
        self.position(account_number).is_some()
    }

    /// Index of the first account with the given number
    pub fn position(&self, account_number: &str) -> Option<usize> {
        self.accounts
            .iter()
            .position(|account| account.account_number == account_number)
    }

    /// Find the first account with the given number
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no account matches.
    pub fn find_by_number(&self, account_number: &str) -> Result<&Account, LedgerError> {
        self.accounts
            .iter()
            .find(|account| account.account_number == account_number)
            .ok_or_else(|| LedgerError::account_not_found(account_number))
    }

    /// Mutable variant of [`find_by_number`](Self::find_by_number)
    #[cfg(test)]
    pub(crate) fn find_by_number_mut(&mut self, account_number: &str) -> Result<&mut Account, LedgerError> {
        self.accounts
            .iter_mut()
            .find(|account| account.account_number == account_number)
            .ok_or_else(|| LedgerError::account_not_found(account_number))
    }

    /// Find the first account whose number and password both match exactly
    ///
    /// Used as the gate for login and for deleting an account. An unknown
    /// number and a wrong password are reported the same way.
    ///
    /// # Errors
    ///
    /// Returns `AuthFailed` if no account matches both credentials.
    pub fn authenticate(&self, account_number: &str, password: &str) -> Result<&Account, LedgerError> {
        self.accounts
            .iter()
            .find(|account| account.account_number == account_number && account.password == password)
            .ok_or_else(|| LedgerError::auth_failed(account_number))
    }

    /// Mutable variant of [`authenticate`](Self::authenticate)
    pub fn authenticate_mut(
        &mut self,
        account_number: &str,
        password: &str,
    ) -> Result<&mut Account, LedgerError> {
        self.accounts
            .iter_mut()
            .find(|account| account.account_number == account_number && account.password == password)
            .ok_or_else(|| LedgerError::auth_failed(account_number))
    }

    /// Remove and return the first account matching both credentials
    ///
    /// # Errors
    ///
    /// Returns `AuthFailed` if no account matches; nothing is removed.
    pub fn remove_authenticated(
        &mut self,
        account_number: &str,
        password: &str,
    ) -> Result<Account, LedgerError> {
        let index = self
            .accounts
            .iter()
            .position(|account| account.account_number == account_number && account.password == password)
            .ok_or_else(|| LedgerError::auth_failed(account_number))?;
        Ok(self.accounts.remove(index))
    }

    /// Append an account at the end of the stored order
    pub fn insert(&mut self, account: Account) {
        self.accounts.push(account);
    }

    pub(crate) fn accounts_mut(&mut self) -> &mut [Account] {
        &mut self.accounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AccountType;
    use rust_decimal::Decimal;

    fn account(number: &str, password: &str) -> Account {
        Account::new(
            number.to_string(),
            Decimal::ZERO,
            AccountType::Personal,
            password.to_string(),
        )
    }

    fn registry() -> AccountRegistry {
        AccountRegistry::from_accounts(vec![
            account("1111111111", "1111"),
            account("2222222222", "2222"),
            account("3333333333", "3333"),
        ])
    }

    #[test]
    fn test_new_creates_empty_registry() {
        let registry = AccountRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_find_by_number() {
        let registry = registry();
        assert_eq!(
            registry.find_by_number("2222222222").unwrap().password,
            "2222"
        );
        assert_eq!(
            registry.find_by_number("4444444444"),
            Err(LedgerError::account_not_found("4444444444"))
        );
    }

    #[test]
    fn test_find_by_number_returns_first_duplicate() {
        let mut registry = registry();
        registry.insert(account("1111111111", "9999"));

        assert_eq!(
            registry.find_by_number("1111111111").unwrap().password,
            "1111"
        );
    }

    #[test]
    fn test_authenticate_requires_both_credentials() {
        let registry = registry();

        assert!(registry.authenticate("1111111111", "1111").is_ok());
        assert_eq!(
            registry.authenticate("1111111111", "2222"),
            Err(LedgerError::auth_failed("1111111111"))
        );
        assert_eq!(
            registry.authenticate("4444444444", "1111"),
            Err(LedgerError::auth_failed("4444444444"))
        );
    }

    #[test]
    fn test_authenticate_matches_duplicate_number_by_password() {
        let mut registry = registry();
        registry.insert(account("1111111111", "9999"));

        let found = registry.authenticate("1111111111", "9999").unwrap();
        assert_eq!(found.password, "9999");
    }

    #[test]
    fn test_authenticate_mut_allows_update() {
        let mut registry = registry();
        registry
            .authenticate_mut("3333333333", "3333")
            .unwrap()
            .balance = Decimal::new(5, 0);

        assert_eq!(
            registry.find_by_number("3333333333").unwrap().balance,
            Decimal::new(5, 0)
        );
    }

    #[test]
    fn test_remove_preserves_order_of_the_rest() {
        let mut registry = registry();
        let removed = registry.remove_authenticated("2222222222", "2222").unwrap();

        assert_eq!(removed.account_number, "2222222222");
        let numbers: Vec<&str> = registry
            .accounts()
            .iter()
            .map(|a| a.account_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["1111111111", "3333333333"]);
        assert!(!registry.contains("2222222222"));
    }

    #[test]
    fn test_remove_authenticated_picks_matching_duplicate() {
        let mut registry = registry();
        registry.insert(account("1111111111", "9999"));

        let removed = registry.remove_authenticated("1111111111", "9999").unwrap();

        assert_eq!(removed.password, "9999");
        assert_eq!(registry.find_by_number("1111111111").unwrap().password, "1111");
        assert_eq!(
            registry.remove_authenticated("2222222222", "0000"),
            Err(LedgerError::auth_failed("2222222222"))
        );
        assert_eq!(registry.len(), 3);
    }
}
