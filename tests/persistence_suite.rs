mod common;

use common::{date, may_ledger};
use finance_tracker::{
    errors::StorageError,
    ledger::{Category, Ledger},
    storage::{self, ImportSummary},
};
use rust_decimal_macros::dec;
use tempfile::TempDir;

#[test]
fn export_then_import_reproduces_ledger() {
    let mut original = may_ledger();
    original.toggle_subscription(0);
    let json = storage::export_json(&original).expect("export");

    let mut restored = Ledger::new();
    let summary = storage::import_json(&mut restored, &json).expect("import");
    assert_eq!(
        summary,
        ImportSummary {
            incomes: 1,
            expenses: 2,
            subscriptions: 1
        }
    );
    assert_eq!(restored, original);
    assert_eq!(storage::export_json(&restored).unwrap(), json);
}

#[test]
fn one_invalid_element_rejects_the_whole_import() {
    let mut ledger = may_ledger();
    let before = storage::export_json(&ledger).unwrap();
    let document = r#"{
        "incomes": [{"date": "2024-06-01", "source": "Bonus", "amount": "50"}],
        "expenses": [
            {"date": "2024-06-02", "category": "Food", "amount": "5", "note": "tea"},
            {"date": "2024-06-03", "category": "Food", "amount": "0", "note": "free"}
        ]
    }"#;

    let err = storage::import_json(&mut ledger, document).unwrap_err();
    assert!(matches!(err, StorageError::Serde(_)));
    assert_eq!(storage::export_json(&ledger).unwrap(), before);
}

#[test]
fn unknown_category_and_malformed_documents_are_rejected() {
    let mut ledger = may_ledger();
    let before = ledger.clone();
    let documents = [
        r#"{"expenses": [{"date": "2024-06-02", "category": "Rent", "amount": "5", "note": "x"}]}"#,
        r#"{"subscriptions": [{"name": "Gym", "monthlyPrice": "5", "startDate": "2024-02-30", "isActive": true}]}"#,
        r#"{"incomes": {"date": "2024-06-01"}}"#,
        r#"[1, 2, 3]"#,
        "not json",
    ];
    for document in documents {
        assert!(
            storage::import_json(&mut ledger, document).is_err(),
            "accepted {document}"
        );
        assert_eq!(ledger, before);
    }
}

#[test]
fn missing_arrays_and_numeric_amounts_are_accepted() {
    let mut ledger = may_ledger();
    let summary = storage::import_json(
        &mut ledger,
        r#"{"expenses": [{"date": "2024-07-04", "category": "School", "amount": 12.5, "note": "pens"}]}"#,
    )
    .expect("import");
    assert_eq!(summary.expenses, 1);
    assert!(ledger.incomes().is_empty());
    assert!(ledger.subscriptions().is_empty());
    let expense = &ledger.expenses()[0];
    assert_eq!(expense.category(), Category::School);
    assert_eq!(expense.amount(), dec!(12.5));
    assert_eq!(expense.date(), date(2024, 7, 4));
}

#[test]
fn null_arrays_are_accepted_as_empty() {
    let mut ledger = may_ledger();
    let summary = storage::import_json(
        &mut ledger,
        r#"{"incomes": null, "expenses": [{"date": "2024-07-04", "category": "Food", "amount": "3", "note": "tea"}], "subscriptions": null}"#,
    )
    .expect("import");
    assert_eq!(summary.incomes, 0);
    assert_eq!(summary.expenses, 1);
    assert_eq!(summary.subscriptions, 0);
    assert!(ledger.incomes().is_empty());
    assert!(ledger.subscriptions().is_empty());
}

#[test]
fn amounts_above_the_cap_reject_the_import() {
    let mut ledger = may_ledger();
    let before = storage::export_json(&ledger).unwrap();
    for amount in [r#""79228162514264337593543950335""#, r#""1000000000000.01""#] {
        let document = format!(
            r#"{{"incomes": [{{"date": "2024-06-01", "source": "Windfall", "amount": {amount}}}]}}"#
        );
        let err = storage::import_json(&mut ledger, &document).unwrap_err();
        assert!(matches!(err, StorageError::Serde(_)), "accepted {amount}");
    }
    assert_eq!(storage::export_json(&ledger).unwrap(), before);
}

#[test]
fn file_snapshot_roundtrip() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("snapshot.json");
    let ledger = may_ledger();
    storage::save_ledger_to_path(&ledger, &path).expect("save");

    let mut restored = Ledger::new();
    storage::import_from_path(&mut restored, &path).expect("import from file");
    assert_eq!(restored, ledger);

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"monthlyPrice\""));
    assert!(raw.contains("\"category\": \"Food\""));
}
