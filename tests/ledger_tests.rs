//! End-to-end ledger tests against real files
//!
//! These tests drive the public library API over a `FileStore` placed in a
//! temporary directory, so each test gets an isolated ledger file:
//! - A full session: create, deposit, failed withdrawal, transfer, delete
//! - State surviving across sessions (re-opening the same file)
//! - Load/save idempotence over the fixtures in tests/fixtures/
//! - First-run and corrupt-file behaviour

#[cfg(test)]
mod tests {
    use account_ledger::io::AccountStore;
    use account_ledger::{AccountType, FileStore, Ledger, LedgerError};
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn ledger_path(dir: &TempDir) -> PathBuf {
        dir.path().join("accounts.txt")
    }

    fn fixture(name: &str) -> String {
        let path = format!("tests/fixtures/{}", name);
        fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {}: {}", path, e))
    }

    #[test]
    fn test_session_scenario() {
        let dir = TempDir::new().unwrap();
        let path = ledger_path(&dir);
        let mut ledger = Ledger::open(FileStore::new(&path)).unwrap();

        let sender = ledger
            .create_account("personal", Decimal::new(10000, 2), "1111")
            .unwrap();
        assert_eq!(sender.balance, Decimal::new(100, 0));
        assert_eq!(sender.account_type, AccountType::Personal);
        let sender = sender.account_number;

        assert_eq!(
            ledger.deposit(&sender, "1111", Decimal::new(50, 0)),
            Ok(Decimal::new(150, 0))
        );

        let result = ledger.withdraw(&sender, "1111", Decimal::new(200, 0));
        assert!(matches!(result, Err(LedgerError::InsufficientFunds { .. })));
        assert_eq!(ledger.balance(&sender, "1111"), Ok(Decimal::new(150, 0)));

        let recipient = ledger
            .create_account("business", Decimal::ZERO, "2222")
            .unwrap()
            .account_number;

        ledger
            .transfer(&sender, &recipient, Decimal::new(100, 0))
            .unwrap();
        assert_eq!(ledger.balance(&sender, "1111"), Ok(Decimal::new(50, 0)));
        assert_eq!(ledger.balance(&recipient, "2222"), Ok(Decimal::new(100, 0)));

        ledger.delete_account(&sender, "1111").unwrap();

        let stored = FileStore::new(&path).load().unwrap();
        assert_eq!(stored.len(), 1);
        assert!(stored.iter().all(|a| a.account_number != sender));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            format!("{},100.00,Business,2222\n", recipient)
        );
    }

    #[test]
    fn test_state_survives_new_session() {
        let dir = TempDir::new().unwrap();
        let path = ledger_path(&dir);

        let number = {
            let mut ledger = Ledger::open(FileStore::new(&path)).unwrap();
            let account = ledger
                .create_account("business", Decimal::new(2500, 2), "77")
                .unwrap();
            ledger
                .withdraw(&account.account_number, "77", Decimal::new(5, 0))
                .unwrap();
            account.account_number
        };

        let ledger = Ledger::open(FileStore::new(&path)).unwrap();
        let account = ledger.authenticate(&number, "77").unwrap();
        assert_eq!(account.balance, Decimal::new(20, 0));
        assert_eq!(account.account_type, AccountType::Business);
    }

    #[test]
    fn test_missing_file_is_empty_ledger() {
        let dir = TempDir::new().unwrap();
        let path = ledger_path(&dir);

        let ledger = Ledger::open(FileStore::new(&path)).unwrap();

        assert!(ledger.accounts().is_empty());
        assert!(!path.exists(), "opening must not create the file");
    }

    #[rstest]
    #[case::well_formed("well_formed.txt")]
    #[case::legacy_floats("legacy_floats.txt")]
    fn test_save_of_load_is_stable(#[case] input: &str) {
        let dir = TempDir::new().unwrap();
        let path = ledger_path(&dir);
        fs::write(&path, fixture(input)).unwrap();
        let mut store = FileStore::new(&path);

        let first = store.load().unwrap();
        store.save(&first).unwrap();
        let once = fs::read_to_string(&path).unwrap();

        let second = store.load().unwrap();
        store.save(&second).unwrap();
        let twice = fs::read_to_string(&path).unwrap();

        assert_eq!(once, twice);
        assert_eq!(once.lines().count(), 3);
    }

    #[test]
    fn test_well_formed_store_is_rewritten_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = ledger_path(&dir);
        let text = fixture("well_formed.txt");
        fs::write(&path, &text).unwrap();
        let mut store = FileStore::new(&path);

        let accounts = store.load().unwrap();
        store.save(&accounts).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), text);
    }

    #[test]
    fn test_legacy_floats_are_normalized() {
        let dir = TempDir::new().unwrap();
        let path = ledger_path(&dir);
        fs::write(&path, fixture("legacy_floats.txt")).unwrap();
        let mut store = FileStore::new(&path);

        let accounts = store.load().unwrap();
        store.save(&accounts).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "0123456789,150.00,Personal,1234\n9876543210,0.00,Business,0000\n5555555555,0.00,Personal,5\n"
        );
    }

    #[test]
    fn test_corrupt_store_aborts_open() {
        let dir = TempDir::new().unwrap();
        let path = ledger_path(&dir);
        let text = fixture("corrupt.txt");
        fs::write(&path, &text).unwrap();

        match Ledger::open(FileStore::new(&path)) {
            Err(LedgerError::MalformedRecord { line, message }) => {
                assert_eq!(line, Some(2));
                assert!(message.contains("Savings"), "unexpected message: {}", message);
            }
            Err(e) => panic!("expected MalformedRecord, got {:?}", e),
            Ok(_) => panic!("expected MalformedRecord, got a ledger"),
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), text);
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let path = ledger_path(&dir);
        let mut ledger = Ledger::open(FileStore::new(&path)).unwrap();

        ledger
            .create_account("personal", Decimal::ONE, "1")
            .unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![Path::new("accounts.txt").as_os_str().to_owned()]);
    }
}
