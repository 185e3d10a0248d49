//! Record codec for persisted accounts
//!
//! Converts an [`Account`] to and from one line of comma-delimited text:
//!
//! ```text
//! <account_number>,<balance>,<account_type>,<password>\n
//! ```
//!
//! Balances are written with [`BALANCE_SCALE`] decimal places, and decoded
//! balances are rounded to the same scale, so a loaded account holds exactly
//! what its next save will write. All functions are pure (no I/O); the ledger
//! store feeds them one line or one record at a time.

use crate::types::account::BALANCE_SCALE;
use crate::types::{Account, AccountType, LedgerError};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Field separator of a persisted record
pub const DELIMITER: char = ',';

/// Number of fields in a persisted record
pub const FIELD_COUNT: usize = 4;

/// Characters a text field may not contain without corrupting the line
const FORBIDDEN: [char; 4] = [DELIMITER, '"', '\n', '\r'];

/// Format a balance with the persisted precision
///
/// ```
/// use account_ledger::io::record_codec::format_balance;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_balance(Decimal::new(150, 0)), "150.00");
/// ```
pub fn format_balance(balance: Decimal) -> String {
    format!("{:.*}", BALANCE_SCALE as usize, balance.round_dp(BALANCE_SCALE))
}

/// Produce the four text fields of an account, in persisted order
///
/// # Errors
///
/// Returns `MalformedRecord` if the account number or password contains the
/// delimiter, a quote or a line break.
pub fn encode_fields(account: &Account) -> Result<[String; FIELD_COUNT], LedgerError> {
    check_field("account number", &account.account_number)?;
    check_field("password", &account.password)?;

    Ok([
        account.account_number.clone(),
        format_balance(account.balance),
        account.account_type.tag().to_string(),
        account.password.clone(),
    ])
}

/// Encode an account as a single terminated line
pub fn encode(account: &Account) -> Result<String, LedgerError> {
    let mut line = encode_fields(account)?.join(&DELIMITER.to_string());
    line.push('\n');
    Ok(line)
}

/// Decode one line (with or without its terminator) into an account
///
/// # Errors
///
/// Returns `MalformedRecord` if the line does not have exactly four fields,
/// the balance is not a number, the type tag is not `Personal` or
/// `Business`, or the account number or password holds a reserved character.
pub fn decode(line: &str) -> Result<Account, LedgerError> {
    let line = line.trim_end_matches(|c| c == '\n' || c == '\r');
    decode_fields(line.split(DELIMITER))
}

/// Decode an already split record
///
/// Fields are trimmed of surrounding whitespace before parsing.
pub fn decode_fields<'a, I>(fields: I) -> Result<Account, LedgerError>
where
    I: IntoIterator<Item = &'a str>,
{
    let fields: Vec<&str> = fields.into_iter().map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(LedgerError::malformed_record(
            None,
            format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        ));
    }

    check_field("account number", fields[0])?;
    check_field("password", fields[3])?;
    let balance = parse_balance(fields[1])?;
    let account_type = AccountType::from_tag(fields[2]).ok_or_else(|| {
        LedgerError::malformed_record(None, format!("unknown account type '{}'", fields[2]))
    })?;

    Ok(Account::new(
        fields[0].to_string(),
        balance,
        account_type,
        fields[3].to_string(),
    ))
}

/// Parse a balance field
///
/// Accepts plain decimals (`150.00`, `100.0`) and scientific notation
/// (`1e-05`), which older ledgers written from floats may contain. The value
/// is rounded to [`BALANCE_SCALE`] places the same way [`format_balance`]
/// rounds it.
fn parse_balance(field: &str) -> Result<Decimal, LedgerError> {
    Decimal::from_str(field)
        .or_else(|_| Decimal::from_scientific(field))
        .map(|balance| balance.round_dp(BALANCE_SCALE))
        .map_err(|_| LedgerError::malformed_record(None, format!("invalid balance '{}'", field)))
}

/// Reject a text field that would break the line layout
///
/// The value itself never appears in the error, since the field may be a
/// password.
fn check_field(name: &str, value: &str) -> Result<(), LedgerError> {
    if value.contains(&FORBIDDEN[..]) {
        return Err(LedgerError::malformed_record(
            None,
            format!("{} contains a reserved character", name),
        ));
    }
    Ok(())
}
