//! Store Module Tests
//!
//! Validates the id-recycling policy and local storage mechanics.
//!
//! ## Test Scopes
//! - **ProductStore**: allocation, reuse, backfilling, and deletion semantics.
//! - **Seed loading**: parsing the startup JSON file.
//!
//! *Note: HTTP-level behavior (status codes, validation) is tested in the
//! `product` module.*

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::product::types::ProductRecord;
    use crate::store::records::{ProductStore, StoreError};
    use crate::store::seed;

    fn record(name: &str) -> ProductRecord {
        ProductRecord {
            product_id: -1,
            product_name: name.to_string(),
            product_owner_name: "Owner".to_string(),
            developers: vec!["Dev One".to_string(), "Dev Two".to_string()],
            scrum_master_name: "Scrum Master".to_string(),
            start_date: "2024/01/01".to_string(),
            methodology: "Agile".to_string(),
        }
    }

    fn record_with_id(id: i64, name: &str) -> ProductRecord {
        ProductRecord {
            product_id: id,
            ..record(name)
        }
    }

    // ============================================================
    // ALLOCATION
    // ============================================================

    #[test]
    fn test_insert_assigns_sequential_ids_from_empty() {
        let mut store = ProductStore::new();

        let a = store.insert(record("A"));
        let b = store.insert(record("B"));
        let c = store.insert(record("C"));

        assert_eq!(a.product_id, 0);
        assert_eq!(b.product_id, 1);
        assert_eq!(c.product_id, 2);
    }

    #[test]
    fn test_insert_overwrites_payload_id() {
        let mut store = ProductStore::new();

        // The payload claims id 99; the store must not honor it.
        let stored = store.insert(record_with_id(99, "A"));
        assert_eq!(stored.product_id, 0);
        assert!(store.get(99).is_none());
    }

    #[test]
    fn test_insert_then_get_round_trips() {
        let mut store = ProductStore::new();

        let stored = store.insert(record("A"));
        let fetched = store.get(stored.product_id).cloned();

        assert_eq!(fetched, Some(stored));
    }

    // ============================================================
    // DELETION & REUSE
    // ============================================================

    #[test]
    fn test_remove_marks_slot_absent() {
        let mut store = ProductStore::new();
        let a = store.insert(record("A"));

        assert!(store.remove(a.product_id));
        assert!(store.get(a.product_id).is_none());
        assert_eq!(store.len(), 0);
        assert_eq!(store.allocated(), 1, "slot stays allocated after delete");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = ProductStore::new();
        let a = store.insert(record("A"));

        assert!(store.remove(a.product_id));
        assert!(!store.remove(a.product_id), "second delete is a no-op");
        assert!(!store.remove(42), "never-allocated id is a no-op");
        assert!(!store.remove(-1), "negative id is a no-op");
    }

    #[test]
    fn test_remove_then_insert_reuses_id() {
        let mut store = ProductStore::new();
        let a = store.insert(record("A"));
        store.insert(record("B"));

        store.remove(a.product_id);
        let replacement = store.insert(record("C"));

        assert_eq!(replacement.product_id, a.product_id);
    }

    #[test]
    fn test_freed_ids_reused_lowest_first() {
        let mut store = ProductStore::new();
        for name in ["A", "B", "C", "D"] {
            store.insert(record(name));
        }

        // Free 3 before 1; reuse must still start at 1.
        store.remove(3);
        store.remove(1);

        assert_eq!(store.insert(record("E")).product_id, 1);
        assert_eq!(store.insert(record("F")).product_id, 3);
        assert_eq!(store.insert(record("G")).product_id, 4, "then the table grows");
    }

    #[test]
    fn test_list_excludes_deleted_records() {
        let mut store = ProductStore::new();
        store.insert(record("A"));
        let b = store.insert(record("B"));
        store.insert(record("C"));

        store.remove(b.product_id);

        let ids: Vec<i64> = store.list().iter().map(|r| r.product_id).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    // ============================================================
    // PUT (WRITE-AT-ID)
    // ============================================================

    #[test]
    fn test_put_replaces_record_in_place() {
        let mut store = ProductStore::new();
        store.insert(record("A"));

        let stored = store.put(0, record("A2")).unwrap();

        assert_eq!(stored.product_id, 0);
        assert_eq!(store.get(0).unwrap().product_name, "A2");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_put_reclaims_freed_id() {
        let mut store = ProductStore::new();
        store.insert(record("A"));
        store.insert(record("B"));

        store.remove(0);
        store.put(0, record("A2")).unwrap();

        // Id 0 is live again, so the next insert must not reuse it.
        assert_eq!(store.insert(record("C")).product_id, 2);
    }

    #[test]
    fn test_put_beyond_table_backfills_free_slots() {
        let mut store = ProductStore::new();

        let stored = store.put(5, record("F")).unwrap();

        assert_eq!(stored.product_id, 5);
        assert_eq!(store.allocated(), 6);
        assert_eq!(store.len(), 1);
        for id in 0..5 {
            assert!(store.get(id).is_none(), "slot {} should be absent", id);
        }
        let free: Vec<usize> = store.free_ids().collect();
        assert_eq!(free, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_backfilled_ids_are_independently_creatable() {
        let mut store = ProductStore::new();
        store.put(3, record("D")).unwrap();

        // Inserts fill the padding in ascending order.
        assert_eq!(store.insert(record("A")).product_id, 0);
        assert_eq!(store.insert(record("B")).product_id, 1);
        assert_eq!(store.insert(record("C")).product_id, 2);
        assert_eq!(store.insert(record("E")).product_id, 4);
    }

    #[test]
    fn test_put_negative_id_rejected() {
        let mut store = ProductStore::new();

        let err = store.put(-1, record("A")).unwrap_err();

        assert_eq!(err, StoreError::NegativeId(-1));
        assert_eq!(store.allocated(), 0, "failed put must not mutate state");
    }

    // ============================================================
    // SEEDING
    // ============================================================

    #[test]
    fn test_from_records_dense_seed() {
        let store = ProductStore::from_records(vec![
            record_with_id(0, "A"),
            record_with_id(1, "B"),
            record_with_id(2, "C"),
        ]);

        assert_eq!(store.len(), 3);
        assert_eq!(store.free_ids().count(), 0);

        let mut store = store;
        assert_eq!(store.insert(record("D")).product_id, 3);
    }

    #[test]
    fn test_from_records_sparse_seed_frees_gaps() {
        let mut store =
            ProductStore::from_records(vec![record_with_id(0, "A"), record_with_id(4, "B")]);

        assert_eq!(store.len(), 2);
        let free: Vec<usize> = store.free_ids().collect();
        assert_eq!(free, vec![1, 2, 3]);

        assert_eq!(store.insert(record("C")).product_id, 1);
    }

    #[test]
    fn test_from_records_skips_negative_ids() {
        let store = ProductStore::from_records(vec![record_with_id(-5, "bad"), record_with_id(0, "A")]);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().product_name, "A");
    }

    #[test]
    fn test_load_records_reads_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{
                "productId": 0,
                "productName": "A",
                "productOwnerName": "B",
                "developers": ["D1"],
                "scrumMasterName": "S",
                "startDate": "2024/01/01",
                "methodology": "Agile"
            }}]"#
        )
        .unwrap();

        let records = seed::load_records(file.path()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].product_name, "A");
        assert_eq!(records[0].developers, vec!["D1"]);
    }

    #[test]
    fn test_load_records_missing_file_is_an_error() {
        let err = seed::load_records(std::path::Path::new("/nonexistent/db.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read seed file"));
    }

    #[test]
    fn test_load_records_malformed_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = seed::load_records(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse seed file"));
    }
}
