use std::{fs, sync::Arc};

use chrono::{DateTime, TimeZone, Utc};
use tabkeep::app::TabBook;
use tabkeep_core::{Authorization, Clock};
use tabkeep_domain::MinorUnits;
use tabkeep_storage_json::StoragePaths;
use tempfile::tempdir;

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn open(paths: &StoragePaths) -> TabBook {
    let clock = Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()));
    TabBook::open_with_clock(paths, clock)
}

#[test]
fn state_survives_between_invocations() {
    let temp = tempdir().expect("tempdir");
    let paths = StoragePaths::in_dir(temp.path().join(".tabkeep"));

    open(&paths).add("coffee", "2.5").expect("add");
    open(&paths).add("tea", "1.00").expect("add");
    let outcome = open(&paths).pay_partial("3.00").expect("pay");

    assert_eq!(outcome.paid, vec![1]);
    let fresh = open(&paths);
    assert_eq!(fresh.balance().expect("balance"), MinorUnits(50));
    assert_eq!(fresh.unpaid().expect("list")[0].item, "tea");
}

#[test]
fn ledger_document_matches_the_documented_layout() {
    let temp = tempdir().expect("tempdir");
    let paths = StoragePaths::in_dir(temp.path());
    open(&paths).add("coffee", "2.5").expect("add");

    let raw = fs::read_to_string(&paths.ledger_file).expect("read ledger");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(
        value,
        serde_json::json!({
            "balance": 0,
            "entries": [
                { "id": 1, "item": "coffee", "price": 250, "created": 1_717_243_200 }
            ]
        })
    );
}

#[test]
fn audit_log_collects_every_mutation() {
    let temp = tempdir().expect("tempdir");
    let paths = StoragePaths::in_dir(temp.path());
    let book = open(&paths);

    book.add("coffee", "2.5").expect("add");
    book.add("tea", "1").expect("add");
    book.pay_by_id(1).expect("pay id");
    book.pay_by_id(42).expect("pay missing id");
    book.pay_partial("0.5").expect("pay partial");
    book.balance().expect("read only");
    book.unpaid().expect("read only");

    let log = fs::read_to_string(&paths.log_file).expect("read log");
    assert_eq!(
        log,
        "2024-06-01T12:00:00Z ADD id=1 price=2.5\n\
         2024-06-01T12:00:00Z ADD id=2 price=1\n\
         2024-06-01T12:00:00Z PAY_ID id=1\n\
         2024-06-01T12:00:00Z PAY_PARTIAL amount=0.5\n"
    );
}

#[test]
fn wipe_removes_ledger_config_and_log() {
    let temp = tempdir().expect("tempdir");
    let paths = StoragePaths::in_dir(temp.path().join(".tabkeep"));
    let book = open(&paths);
    book.add("coffee", "1").expect("add");
    book.set_password("pw").expect("set password");
    assert!(paths.config_file.exists());
    assert!(paths.log_file.exists());

    assert_eq!(book.wipe("pw").expect("wipe"), Authorization::Granted);

    assert!(!paths.root.exists());
    assert_eq!(book.authorize("pw").expect("authorize"), Authorization::NoPassword);
}
