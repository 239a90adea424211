//! Store Invariant Tests
//!
//! Properties of the table store that hold regardless of the HTTP layer:
//! - Reads never mutate
//! - Ids are generated densely per table and never taken from payloads
//! - Concurrent inserts through one shared store never collide
//! - Updates are shallow merges that keep the id and the slot
//! - Pagination is a plain slice of table order
//! - Deletes compact the table

use std::collections::HashSet;
use std::thread;

use serde_json::{json, Value};
use tablestore::rest_api::{RestHandler, StoreFacade};
use tablestore::store::{seed, Record, Store, StoreError, CREATED_AT_FIELD};

// =============================================================================
// Helper Functions
// =============================================================================

fn rec(value: Value) -> Record {
    Record::from_value(value)
}

fn ids(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| r.id().map(str::to_string))
        .collect()
}

fn all(store: &Store, table: &str) -> Vec<Record> {
    store.list(table, usize::MAX, 0).unwrap().0
}

// =============================================================================
// Read Idempotence
// =============================================================================

#[test]
fn test_reads_do_not_mutate() {
    let store = seed::marketplace().unwrap();
    let before = all(&store, "orders");

    for _ in 0..10 {
        let _ = store.list("orders", 1, 1).unwrap();
        let _ = store.get("orders", "1").unwrap();
        let _ = store.get("orders", "missing");
    }

    assert_eq!(all(&store, "orders"), before);
}

// =============================================================================
// Id Generation
// =============================================================================

#[test]
fn test_ids_are_dense_after_max() {
    let mut store = seed::marketplace().unwrap();

    let created: Vec<String> = (0..5)
        .map(|i| {
            store
                .insert("users", rec(json!({"n": i})))
                .unwrap()
                .id()
                .unwrap()
                .to_string()
        })
        .collect();

    assert_eq!(created, vec!["4", "5", "6", "7", "8"]);
}

#[test]
fn test_ids_are_per_table() {
    let mut store = Store::with_empty_tables(["a", "b"]);

    let a = store.insert("a", Record::new()).unwrap();
    let b = store.insert("b", Record::new()).unwrap();

    assert_eq!(a.id(), Some("1"));
    assert_eq!(b.id(), Some("1"));
}

#[test]
fn test_forged_ids_in_payload_are_ignored() {
    let mut store = Store::with_empty_tables(["t"]);

    let first = store.insert("t", rec(json!({"id": "1000"}))).unwrap();
    let second = store.insert("t", rec(json!({"id": "1"}))).unwrap();

    assert_eq!(first.id(), Some("1"));
    assert_eq!(second.id(), Some("2"));
}

#[test]
fn test_non_numeric_seed_ids() {
    let mut store = Store::new([(
        "notes",
        vec![rec(json!({"id": "alpha"})), rec(json!({"id": "12b"}))],
    )])
    .unwrap();

    let created = store.insert("notes", Record::new()).unwrap();
    assert_eq!(created.id(), Some("13"));
}

#[test]
fn test_huge_seed_ids_keep_increasing() {
    let mut store = seed::from_json(json!({"t": [{"id": "99999999999999999999"}]})).unwrap();

    let first = store.insert("t", Record::new()).unwrap();
    let second = store.insert("t", Record::new()).unwrap();

    assert_eq!(first.id(), Some("100000000000000000000"));
    assert_eq!(second.id(), Some("100000000000000000001"));
}

#[test]
fn test_concurrent_inserts_get_distinct_dense_ids() {
    const THREADS: usize = 8;
    const INSERTS: usize = 50;

    let facade = StoreFacade::new(Store::with_empty_tables(["t"]));

    let handles: Vec<_> = (0..THREADS)
        .map(|worker| {
            let facade = facade.clone();
            thread::spawn(move || {
                (0..INSERTS)
                    .map(|n| {
                        let payload = rec(json!({"worker": worker, "n": n}));
                        facade
                            .insert("t", payload)
                            .unwrap()
                            .id()
                            .unwrap()
                            .to_string()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let created: Vec<String> = handles
        .into_iter()
        .flat_map(|handle| handle.join().unwrap())
        .collect();

    let unique: HashSet<&str> = created.iter().map(String::as_str).collect();
    assert_eq!(unique.len(), THREADS * INSERTS);

    let expected: HashSet<String> = (1..=THREADS * INSERTS).map(|n| n.to_string()).collect();
    let unique: HashSet<String> = created.into_iter().collect();
    assert_eq!(unique, expected);

    assert_eq!(ids(&all(&facade.snapshot(), "t")).len(), THREADS * INSERTS);
}

#[test]
fn test_insert_stamps_created_at() {
    let mut store = Store::with_empty_tables(["t"]);
    let created = store.insert("t", Record::new()).unwrap();

    let stamp = created.get(CREATED_AT_FIELD).and_then(Value::as_str).unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
    assert!(stamp.ends_with('Z'));
}

// =============================================================================
// Updates
// =============================================================================

#[test]
fn test_merge_preserves_unspecified_fields() {
    let mut store = Store::new([(
        "t",
        vec![rec(json!({"id": "1", "x": 1, "y": "untouched"}))],
    )])
    .unwrap();

    let updated = store.merge("t", "1", rec(json!({"x": 2}))).unwrap();
    assert_eq!(
        updated.into_value(),
        json!({"id": "1", "x": 2, "y": "untouched"})
    );
}

#[test]
fn test_update_id_is_immutable() {
    let mut store = seed::marketplace().unwrap();

    store
        .replace("products", "2", rec(json!({"id": "20"})))
        .unwrap();
    store.merge("products", "3", rec(json!({"id": 30}))).unwrap();

    assert_eq!(ids(&all(&store, "products")), vec!["1", "2", "3", "4"]);
    assert!(matches!(
        store.get("products", "20"),
        Err(StoreError::RecordNotFound { .. })
    ));
}

// =============================================================================
// Pagination
// =============================================================================

#[test]
fn test_pagination_matches_slice() {
    let store = seed::marketplace().unwrap();
    let full = all(&store, "products");

    for offset in 0..6 {
        for limit in 0..6 {
            let (page, total) = store.list("products", limit, offset).unwrap();
            let start = offset.min(full.len());
            let end = (offset + limit).min(full.len());
            assert_eq!(page, full[start..end].to_vec());
            assert_eq!(total, 4);
        }
    }
}

// =============================================================================
// Delete Compaction
// =============================================================================

#[test]
fn test_delete_compacts() {
    let mut store = seed::marketplace().unwrap();
    store.delete("subscriptions", "1").unwrap();

    let (page, total) = store.list("subscriptions", 1, 0).unwrap();
    assert_eq!(ids(&page), vec!["2"]);
    assert_eq!(total, 3);

    assert_eq!(
        store.delete("subscriptions", "1").unwrap_err(),
        StoreError::record_not_found("subscriptions", "1")
    );
}

#[test]
fn test_unknown_table_is_not_created() {
    let mut store = seed::marketplace().unwrap();

    assert!(store.insert("nope", Record::new()).is_err());
    assert!(!store.contains_table("nope"));
    assert_eq!(store.table_names().count(), 4);
}
