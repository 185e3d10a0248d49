//! Account Ledger CLI
//!
//! Command-line interface over a file-backed account ledger.
//!
//! # Usage
//!
//! ```bash
//! ledger create --type personal --deposit 100 --password 1234
//! ledger balance 0123456789 --password 1234
//! ledger deposit 0123456789 50 --password 1234
//! ledger withdraw 0123456789 20 --password 1234
//! ledger transfer 0123456789 9876543210 30
//! ledger delete 0123456789 --password 1234
//! ledger --ledger-file /var/lib/ledger/accounts.txt list
//! ```
//!
//! The ledger file defaults to `accounts.txt` in the working directory and can
//! be set with `--ledger-file` or `LEDGER_FILE`.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid credentials, insufficient funds, corrupt ledger, etc.)

use account_ledger::cli;
use account_ledger::logging;
use account_ledger::Ledger;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();
    let config = args.to_config();

    logging::init(&config.log_filter);

    let result = Ledger::open(config.file_store()).and_then(|mut ledger| {
        let mut output = std::io::stdout();
        cli::execute(&mut ledger, args.command, &mut output)
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
