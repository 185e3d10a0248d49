use crate::config::{LedgerConfig, DEFAULT_LOG_FILTER};
use crate::io::DEFAULT_LEDGER_FILE;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Create, fund, transfer between and delete accounts kept in a text file
#[derive(Parser, Debug)]
#[command(name = "ledger")]
#[command(about = "File-backed account ledger", long_about = None)]
pub struct CliArgs {
    /// Backing store, one account per line
    #[arg(
        long = "ledger-file",
        value_name = "PATH",
        env = "LEDGER_FILE",
        default_value = DEFAULT_LEDGER_FILE,
        global = true,
        help = "Path of the ledger file (created on first write)"
    )]
    pub ledger_file: PathBuf,

    /// Tracing filter
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        env = "LEDGER_LOG",
        default_value = DEFAULT_LOG_FILTER,
        global = true,
        help = "Log filter, e.g. 'info' or 'account_ledger=debug' (RUST_LOG overrides)"
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Ledger actions
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Open a new account
    Create {
        #[arg(long = "type", value_name = "TYPE", help = "personal or business")]
        account_type: String,

        #[arg(
            long = "deposit",
            value_name = "AMOUNT",
            default_value = "0",
            allow_hyphen_values = true,
            help = "Initial deposit"
        )]
        initial_deposit: Decimal,

        #[arg(long, value_name = "DIGITS", help = "Numeric password")]
        password: String,
    },

    /// Check credentials of an account
    Login {
        account_number: String,

        #[arg(long, value_name = "DIGITS", help = "Account password")]
        password: String,
    },

    /// Show the balance of an account
    Balance {
        account_number: String,

        #[arg(long, value_name = "DIGITS", help = "Account password")]
        password: String,
    },

    /// Deposit into an account
    Deposit {
        account_number: String,

        #[arg(allow_hyphen_values = true)]
        amount: Decimal,

        #[arg(long, value_name = "DIGITS", help = "Account password")]
        password: String,
    },

    /// Withdraw from an account
    Withdraw {
        account_number: String,

        #[arg(allow_hyphen_values = true)]
        amount: Decimal,

        #[arg(long, value_name = "DIGITS", help = "Account password")]
        password: String,
    },

    /// Move funds from one account to another
    Transfer {
        sender: String,

        recipient: String,

        #[arg(allow_hyphen_values = true)]
        amount: Decimal,
    },

    /// Delete an account
    Delete {
        account_number: String,

        #[arg(long, value_name = "DIGITS", help = "Account password")]
        password: String,
    },

    /// List every account (passwords are not shown)
    List,
}

impl CliArgs {
    /// Resolve the run configuration from parsed arguments
    pub fn to_config(&self) -> LedgerConfig {
        LedgerConfig::new(self.ledger_file.clone(), self.log_level.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;
    use std::path::Path;

    #[rstest]
    #[case::create(
        &["ledger", "create", "--type", "personal", "--deposit", "100.00", "--password", "1234"],
        Command::Create {
            account_type: "personal".to_string(),
            initial_deposit: Decimal::new(10000, 2),
            password: "1234".to_string(),
        }
    )]
    #[case::create_default_deposit(
        &["ledger", "create", "--type", "business", "--password", "1"],
        Command::Create {
            account_type: "business".to_string(),
            initial_deposit: Decimal::ZERO,
            password: "1".to_string(),
        }
    )]
    #[case::login(
        &["ledger", "login", "0123456789", "--password", "1234"],
        Command::Login { account_number: "0123456789".to_string(), password: "1234".to_string() }
    )]
    #[case::deposit(
        &["ledger", "deposit", "0123456789", "50", "--password", "1234"],
        Command::Deposit {
            account_number: "0123456789".to_string(),
            amount: Decimal::new(50, 0),
            password: "1234".to_string(),
        }
    )]
    #[case::negative_withdraw(
        &["ledger", "withdraw", "0123456789", "-5", "--password", "1234"],
        Command::Withdraw {
            account_number: "0123456789".to_string(),
            amount: Decimal::new(-5, 0),
            password: "1234".to_string(),
        }
    )]
    #[case::transfer(
        &["ledger", "transfer", "0123456789", "9876543210", "12.50"],
        Command::Transfer {
            sender: "0123456789".to_string(),
            recipient: "9876543210".to_string(),
            amount: Decimal::new(1250, 2),
        }
    )]
    #[case::list(&["ledger", "list"], Command::List)]
    fn test_command_parsing(#[case] args: &[&str], #[case] expected: Command) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.command, expected);
    }

    #[rstest]
    #[case::defaults(&["ledger", "list"], "accounts.txt", "warn")]
    #[case::before_subcommand(
        &["ledger", "--ledger-file", "/tmp/l.txt", "--log-level", "debug", "list"],
        "/tmp/l.txt",
        "debug"
    )]
    #[case::after_subcommand(&["ledger", "list", "--ledger-file", "other.txt"], "other.txt", "warn")]
    fn test_config_options(
        #[case] args: &[&str],
        #[case] ledger_file: &str,
        #[case] log_filter: &str,
    ) {
        let config = CliArgs::try_parse_from(args).unwrap().to_config();
        assert_eq!(config.ledger_file, Path::new(ledger_file));
        assert_eq!(config.log_filter, log_filter);
    }

    #[rstest]
    #[case::missing_command(&["ledger"])]
    #[case::unknown_command(&["ledger", "close"])]
    #[case::missing_password(&["ledger", "balance", "0123456789"])]
    #[case::bad_amount(&["ledger", "deposit", "0123456789", "ten", "--password", "1"])]
    #[case::missing_type(&["ledger", "create", "--password", "1"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }

    #[rstest]
    #[case::create("create")]
    #[case::login("login")]
    #[case::balance("balance")]
    #[case::deposit("deposit")]
    #[case::withdraw("withdraw")]
    #[case::delete("delete")]
    fn test_password_argument_has_help(#[case] subcommand: &str) {
        let cli = CliArgs::command();
        let password = cli
            .find_subcommand(subcommand)
            .and_then(|cmd| cmd.get_arguments().find(|arg| arg.get_id() == "password"))
            .unwrap_or_else(|| panic!("{} has no password argument", subcommand));

        assert!(password.get_help().is_some());
    }
}
