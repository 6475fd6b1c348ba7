//! End-to-end reconciliation flows: raw service JSON in, collection
//! state out. Mirrors what the entry form and list view actually do,
//! minus the network.

use api_types::Category;
use api_types::expense::RawExpense;
use ledger::{
    Amount, CategoryFilter, Expense, ExpenseDraft, ExpenseStore, LedgerError, PendingOps,
    Submission, reconcile,
};

fn raw(json: &str) -> RawExpense {
    serde_json::from_str(json).unwrap()
}

fn loaded_store() -> ExpenseStore {
    let listing = r#"[
        {"_id": "a1", "name": "Groceries", "amount": 12.5, "category": "Food",
         "date": "2025-01-10T08:00:00Z", "__v": 0},
        {"_id": "42", "name": "Train", "amount": 7.25, "category": "Travel",
         "date": "2025-01-11T18:30:00Z", "__v": 0},
        {"_id": "b7", "name": "Electricity", "amount": 100, "category": "Bills",
         "date": "2025-01-12T12:00:00Z", "__v": 0}
    ]"#;
    let records: Vec<RawExpense> = serde_json::from_str(listing).unwrap();

    let mut store = ExpenseStore::new();
    store.load(records.into_iter().map(Expense::from_raw).collect());
    store
}

#[test]
fn initial_load_normalizes_every_record() {
    let store = loaded_store();

    assert_eq!(store.len(), 3);
    // Canonical ids come from the storage field; order is the service's.
    let ids: Vec<_> = store.records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["a1", "42", "b7"]);
    assert_eq!(store.total().to_string(), "119.75");
}

#[test]
fn create_flow_adds_exactly_one_record() {
    let mut store = loaded_store();

    // The entry form was opened empty, so the flag is Create for good.
    let draft = ExpenseDraft {
        name: "Coffee".to_string(),
        amount: "3.50".to_string(),
        category: Some(Category::Food),
    };
    let valid = draft.validate().unwrap();
    assert_eq!(valid.amount, Amount::new(350));

    // The service accepts the submission and assigns a fresh id.
    let created = Expense::from_raw(raw(
        r#"{"_id": "c9", "name": "Coffee", "amount": 3.5, "category": "Food",
            "date": "2025-01-15T09:30:00Z", "__v": 0}"#,
    ));

    reconcile(&mut store, created, Submission::Create).unwrap();

    assert_eq!(store.len(), 4);
    let record = store.get("c9").unwrap();
    assert_eq!(record.amount, Amount::new(350));
    assert!(
        store
            .records()
            .iter()
            .filter(|r| r.id == "c9")
            .count()
            == 1
    );
}

#[test]
fn edit_flow_replaces_without_duplicating() {
    let mut store = loaded_store();

    // Form opened over record "42": Edit, decided now, never revisited.
    let submission = Submission::Edit;
    let mut draft = ExpenseDraft::from_record(store.get("42").unwrap());
    draft.amount = "20.00".to_string();
    draft.validate().unwrap();

    let updated = Expense::from_raw(raw(
        r#"{"_id": "42", "name": "Train", "amount": 20.0, "category": "Travel",
            "date": "2025-01-11T18:30:00Z", "__v": 1}"#,
    ));

    reconcile(&mut store, updated, submission).unwrap();

    assert_eq!(store.len(), 3);
    let matches: Vec<_> = store.records().iter().filter(|r| r.id == "42").collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].amount, Amount::new(2000));
}

#[test]
fn delete_flow_shrinks_the_total_by_the_removed_amount() {
    let mut store = loaded_store();
    let before = store.total();

    // The remote delete succeeded; now the local removal.
    let removed = store.remove("42").unwrap();

    assert_eq!(store.total(), before - removed.amount);
    assert_eq!(store.len(), 2);
    assert!(store.get("a1").is_some());
    assert!(store.get("b7").is_some());

    // A repeated delete of the same id changes nothing.
    assert!(store.remove("42").is_none());
    assert_eq!(store.len(), 2);
}

#[test]
fn stale_edit_response_is_discarded_not_reinserted() {
    let mut store = loaded_store();

    // "42" disappeared (deleted in a previous session step); the edit
    // response that still references it must not resurrect it.
    store.remove("42").unwrap();

    let stale = Expense::from_raw(raw(
        r#"{"_id": "42", "name": "Train", "amount": 20.0, "category": "Travel",
            "date": "2025-01-11T18:30:00Z", "__v": 1}"#,
    ));

    let err = reconcile(&mut store, stale, Submission::Edit).unwrap_err();
    assert_eq!(err, LedgerError::UnknownId("42".to_string()));
    assert!(!store.contains("42"));
    assert_eq!(store.len(), 2);
}

#[test]
fn invalid_drafts_never_reach_the_store() {
    let store = loaded_store();
    let before = store.len();

    let bad_drafts = [
        ExpenseDraft {
            name: String::new(),
            amount: "3.50".to_string(),
            category: Some(Category::Food),
        },
        ExpenseDraft {
            name: "Coffee".to_string(),
            amount: "-5".to_string(),
            category: Some(Category::Food),
        },
        ExpenseDraft {
            name: "Coffee".to_string(),
            amount: "abc".to_string(),
            category: Some(Category::Food),
        },
        ExpenseDraft {
            name: "Coffee".to_string(),
            amount: "3.50".to_string(),
            category: None,
        },
    ];

    for draft in bad_drafts {
        assert!(draft.validate().is_err());
    }
    // Validation failed before any submission, so nothing changed.
    assert_eq!(store.len(), before);
    assert_eq!(store.total().to_string(), "119.75");
}

#[test]
fn in_flight_guard_blocks_the_edit_delete_race() {
    let mut store = loaded_store();
    let mut pending = PendingOps::new();

    // An edit for "42" goes out.
    pending.begin("42").unwrap();

    // A delete for the same id must wait its turn.
    let err = pending.begin("42").unwrap_err();
    assert_eq!(err, LedgerError::OperationInFlight("42".to_string()));

    // The edit completes and reconciles normally.
    let updated = Expense::from_raw(raw(
        r#"{"_id": "42", "name": "Train", "amount": 20.0, "category": "Travel",
            "date": "2025-01-11T18:30:00Z", "__v": 1}"#,
    ));
    reconcile(&mut store, updated, Submission::Edit).unwrap();
    pending.finish("42");

    // Now the delete may proceed.
    pending.begin("42").unwrap();
    store.remove("42").unwrap();
    pending.finish("42");

    assert!(!store.contains("42"));
}

#[test]
fn filter_projection_tracks_mutations() {
    let mut store = loaded_store();

    let created = Expense::from_raw(raw(
        r#"{"_id": "c9", "name": "Restaurant", "amount": 32.0, "category": "Food",
            "date": "2025-01-16T20:00:00Z", "__v": 0}"#,
    ));
    reconcile(&mut store, created, Submission::Create).unwrap();

    let food = store.filtered(CategoryFilter::Only(Category::Food));
    let ids: Vec<_> = food.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["a1", "c9"]);

    let all = store.filtered(CategoryFilter::All);
    assert_eq!(all.len(), store.len());
}
