//! Command execution
//!
//! Runs one parsed [`Command`] against a [`Ledger`] and writes the
//! user-facing message. Errors are returned untouched so the binary decides
//! how to report them.

use crate::cli::Command;
use crate::core::Ledger;
use crate::io::{format_balance, AccountStore};
use crate::types::LedgerError;
use rand::Rng;
use std::io::Write;

/// Execute `command` and write its outcome to `output`
pub fn execute<S, R>(
    ledger: &mut Ledger<S, R>,
    command: Command,
    output: &mut dyn Write,
) -> Result<(), LedgerError>
where
    S: AccountStore,
    R: Rng,
{
    match command {
        Command::Create {
            account_type,
            initial_deposit,
            password,
        } => {
            let account = ledger.create_account(&account_type, initial_deposit, &password)?;
            writeln!(output, "New account {} created.", account.account_number)?;
        }
        Command::Login {
            account_number,
            password,
        } => {
            let account = ledger.authenticate(&account_number, &password)?;
            writeln!(output, "Logged in to account {}.", account.account_number)?;
        }
        Command::Balance {
            account_number,
            password,
        } => {
            let balance = ledger.balance(&account_number, &password)?;
            writeln!(output, "Balance: {}", format_balance(balance))?;
        }
        Command::Deposit {
            account_number,
            amount,
            password,
        } => {
            let balance = ledger.deposit(&account_number, &password, amount)?;
            writeln!(output, "Deposit successful. Balance: {}", format_balance(balance))?;
        }
        Command::Withdraw {
            account_number,
            amount,
            password,
        } => {
            let balance = ledger.withdraw(&account_number, &password, amount)?;
            writeln!(output, "Withdrawal successful. Balance: {}", format_balance(balance))?;
        }
        Command::Transfer {
            sender,
            recipient,
            amount,
        } => {
            ledger.transfer(&sender, &recipient, amount)?;
            writeln!(output, "Transfer successful.")?;
        }
        Command::Delete {
            account_number,
            password,
        } => {
            let account = ledger.delete_account(&account_number, &password)?;
            writeln!(output, "Account {} deleted successfully.", account.account_number)?;
        }
        Command::List => {
            if ledger.accounts().is_empty() {
                writeln!(output, "No accounts.")?;
            }
            for account in ledger.accounts() {
                writeln!(
                    output,
                    "{}  {:<8}  {:>12}",
                    account.account_number,
                    account.account_type.tag(),
                    format_balance(account.balance)
                )?;
            }
        }
    }

    Ok(())
}
