// Integration tests for the catalog repository: upsert idempotence and
// pagination arithmetic

use artcat_core::types::CatalogRecord;
use artcat_core::CatalogError;
use artcat_store::catalog::CatalogRepo;
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    let mut conn = artcat_store::db::open_in_memory().expect("open in-memory database");
    artcat_store::migrations::apply_migrations(&mut conn).expect("apply migrations");
    conn
}

fn record(group: &str, artifact: &str, version: &str, updated: i64) -> CatalogRecord {
    CatalogRecord {
        group_id: group.to_string(),
        artifact_id: artifact.to_string(),
        version: version.to_string(),
        last_updated_ms: updated,
    }
}

#[test]
fn test_upsert_is_idempotent_on_key() {
    let conn = setup_test_db();

    CatalogRepo::upsert(&conn, &record("com.example", "widget", "1.0.0", 1_000)).unwrap();
    CatalogRepo::upsert(&conn, &record("com.example", "widget", "1.0.0", 2_000)).unwrap();

    // One row for the key, carrying the most recently applied timestamp
    let page = CatalogRepo::list_page(&conn, 1, 10).unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.records.len(), 1);
    assert_eq!(page.records[0].last_updated_ms, 2_000);
}

#[test]
fn test_distinct_versions_coexist() {
    let conn = setup_test_db();

    CatalogRepo::upsert(&conn, &record("com.example", "widget", "1.0.0", 1_000)).unwrap();
    CatalogRepo::upsert(&conn, &record("com.example", "widget", "1.0.1", 1_000)).unwrap();

    assert_eq!(CatalogRepo::count(&conn).unwrap(), 2);
}

#[test]
fn test_upsert_batch_reports_applied_count() {
    let conn = setup_test_db();

    let records: Vec<CatalogRecord> = (0..5)
        .map(|i| record("org.acme", "lib", &format!("0.{i}"), i))
        .collect();
    let applied = CatalogRepo::upsert_batch(&conn, &records).unwrap();

    assert_eq!(applied, 5);
    assert_eq!(CatalogRepo::count(&conn).unwrap(), 5);
}

#[test]
fn test_pagination_arithmetic_last_partial_page() {
    let conn = setup_test_db();

    // 25 rows with zero-padded versions so lexicographic order is numeric
    for i in 1..=25 {
        CatalogRepo::upsert(&conn, &record("com.example", "widget", &format!("{i:02}"), i)).unwrap();
    }

    let page = CatalogRepo::list_page(&conn, 3, 10).unwrap();
    assert_eq!(page.total, 25);
    assert_eq!(page.records.len(), 5);
    assert_eq!(page.records[0].version, "21");
    assert_eq!(page.records[4].version, "25");
}

#[test]
fn test_page_past_the_end_is_empty_with_total() {
    let conn = setup_test_db();
    CatalogRepo::upsert(&conn, &record("a", "b", "1", 0)).unwrap();

    let page = CatalogRepo::list_page(&conn, 9, 10).unwrap();
    assert!(page.records.is_empty());
    assert_eq!(page.total, 1);
}

#[test]
fn test_ordering_is_deterministic_across_reads() {
    let conn = setup_test_db();

    // Insert out of key order
    CatalogRepo::upsert(&conn, &record("org.zeta", "z", "1", 0)).unwrap();
    CatalogRepo::upsert(&conn, &record("com.alpha", "a", "2", 0)).unwrap();
    CatalogRepo::upsert(&conn, &record("com.alpha", "a", "1", 0)).unwrap();
    CatalogRepo::upsert(&conn, &record("com.alpha", "b", "1", 0)).unwrap();

    let first = CatalogRepo::list_page(&conn, 1, 10).unwrap();
    let second = CatalogRepo::list_page(&conn, 1, 10).unwrap();
    assert_eq!(first.records, second.records);

    let keys: Vec<(String, String, String)> = first
        .records
        .into_iter()
        .map(|r| (r.group_id, r.artifact_id, r.version))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("com.alpha".into(), "a".into(), "1".into()),
            ("com.alpha".into(), "a".into(), "2".into()),
            ("com.alpha".into(), "b".into(), "1".into()),
            ("org.zeta".into(), "z".into(), "1".into()),
        ]
    );
}

#[test]
fn test_list_page_rejects_zero_arguments() {
    let conn = setup_test_db();

    assert!(matches!(
        CatalogRepo::list_page(&conn, 0, 10),
        Err(CatalogError::InvalidInput(_))
    ));
    assert!(matches!(
        CatalogRepo::list_page(&conn, 1, 0),
        Err(CatalogError::InvalidInput(_))
    ));
}

#[test]
fn test_missing_table_surfaces_storage_error() {
    // No migrations applied: the artifacts table does not exist
    let conn = artcat_store::db::open_in_memory().unwrap();

    let err = CatalogRepo::list_page(&conn, 1, 10).unwrap_err();
    assert!(matches!(err, CatalogError::Storage { .. }));
    assert_eq!(err.code(), "ERR_STORAGE");
}

#[test]
fn test_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");

    {
        let mut conn = artcat_store::db::open(&path).unwrap();
        artcat_store::migrations::apply_migrations(&mut conn).unwrap();
        CatalogRepo::upsert(&conn, &record("com.example", "widget", "1.0.0", 42)).unwrap();
    }

    let mut conn = artcat_store::db::open(&path).unwrap();
    artcat_store::migrations::apply_migrations(&mut conn).unwrap();
    let page = CatalogRepo::list_page(&conn, 1, 10).unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.records[0].last_updated_ms, 42);
}
