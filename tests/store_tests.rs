// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use pocketbook::models::{NewTransaction, Transaction, TransactionPatch, TransactionType};
use pocketbook::store::Store;
use tempfile::tempdir;

fn draft(amount: f64, date: &str) -> NewTransaction {
    NewTransaction {
        r#type: TransactionType::Expense,
        amount,
        category_id: "food".to_string(),
        note: String::new(),
        date: date.parse().unwrap(),
    }
}

fn record(id: &str, amount: f64) -> Transaction {
    Transaction {
        id: id.to_string(),
        r#type: TransactionType::Income,
        amount,
        category_id: "salary".to_string(),
        note: String::new(),
        date: "2024-03-01".parse().unwrap(),
        created_at: "2024-03-01T08:00:00Z".parse::<DateTime<Utc>>().unwrap(),
    }
}

#[test]
fn add_prepends_and_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("transactions.json");

    let mut store = Store::open(&path);
    let first = store.add(draft(10.0, "2024-03-01")).unwrap();
    let second = store.add(draft(20.0, "2024-03-02")).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(store.list()[0].id, second.id);
    assert_eq!(store.list()[1].id, first.id);

    let reopened = Store::open(&path);
    assert_eq!(reopened.list().len(), 2);
    assert_eq!(reopened.list()[0].id, second.id);
}

#[test]
fn delete_missing_id_is_a_silent_noop() {
    let dir = tempdir().unwrap();
    let mut store = Store::open(dir.path().join("transactions.json"));
    store.add(draft(5.0, "2024-03-01")).unwrap();

    assert!(!store.delete("no-such-id").unwrap());
    assert_eq!(store.list().len(), 1);
}

#[test]
fn delete_removes_matching_record() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("transactions.json");
    let mut store = Store::open(&path);
    let tx = store.add(draft(5.0, "2024-03-01")).unwrap();

    assert!(store.delete(&tx.id).unwrap());
    assert!(store.list().is_empty());
    assert!(Store::open(&path).list().is_empty());
}

#[test]
fn update_merges_fields_and_preserves_identity() {
    let dir = tempdir().unwrap();
    let mut store = Store::open(dir.path().join("transactions.json"));
    let tx = store.add(draft(5.0, "2024-03-01")).unwrap();

    let changed = store
        .update(
            &tx.id,
            TransactionPatch {
                amount: Some(42.5),
                note: Some("groceries".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(changed);

    let updated = store.get(&tx.id).unwrap();
    assert_eq!(updated.amount, 42.5);
    assert_eq!(updated.note, "groceries");
    assert_eq!(updated.id, tx.id);
    assert_eq!(updated.created_at, tx.created_at);
    assert_eq!(updated.date, tx.date);

    assert!(!store.update("no-such-id", TransactionPatch::default()).unwrap());
}

#[test]
fn corrupt_blob_fails_closed_to_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("transactions.json");
    std::fs::write(&path, "{ not json [").unwrap();

    let mut store = Store::open(&path);
    assert!(store.list().is_empty());

    // The store is usable again after the next mutation.
    store.add(draft(1.0, "2024-03-01")).unwrap();
    assert_eq!(Store::open(&path).list().len(), 1);
}

#[test]
fn replace_all_swaps_the_whole_list() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("transactions.json");
    let mut store = Store::open(&path);
    store.add(draft(1.0, "2024-03-01")).unwrap();

    store.replace_all(vec![record("a", 1.0), record("b", 2.0)]).unwrap();
    assert_eq!(store.list().len(), 2);

    store.replace_all(Vec::new()).unwrap();
    assert!(store.list().is_empty());
    assert!(Store::open(&path).list().is_empty());
}

#[test]
fn merge_drops_records_with_existing_ids() {
    let dir = tempdir().unwrap();
    let mut store = Store::open(dir.path().join("transactions.json"));
    store.replace_all(vec![record("a", 1.0)]).unwrap();

    let added = store
        .merge(vec![record("a", 99.0), record("b", 2.0)])
        .unwrap();
    assert_eq!(added, 1);
    assert_eq!(store.list().len(), 2);
    // The existing record wins over the imported duplicate.
    assert_eq!(store.get("a").unwrap().amount, 1.0);
    // New records are appended after existing ones.
    assert_eq!(store.list()[1].id, "b");
}
