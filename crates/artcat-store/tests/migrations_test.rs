// Integration tests for the migration framework

use rusqlite::Connection;

fn setup_test_db() -> Connection {
    Connection::open_in_memory().expect("create in-memory database")
}

fn table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

#[test]
fn test_apply_migrations_on_empty_db() {
    let mut conn = setup_test_db();

    let result = artcat_store::migrations::apply_migrations(&mut conn);
    assert!(result.is_ok(), "migrations should succeed: {:?}", result.err());

    let tables = table_names(&conn);
    assert!(tables.contains(&"schema_version".to_string()));
    assert!(tables.contains(&"artifacts".to_string()));
}

#[test]
fn test_migration_idempotency() {
    let mut conn = setup_test_db();
    artcat_store::migrations::apply_migrations(&mut conn).unwrap();

    // Re-running must neither fail nor duplicate version entries
    assert!(artcat_store::migrations::apply_migrations(&mut conn).is_ok());

    let version_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version_count, 1);
}

#[test]
fn test_checksum_is_recorded() {
    let mut conn = setup_test_db();
    artcat_store::migrations::apply_migrations(&mut conn).unwrap();

    let checksum: String = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = ?",
            ["001_catalog_schema"],
            |row| row.get(0),
        )
        .unwrap();

    assert_eq!(checksum.len(), 64, "SHA256 checksum should be 64 hex chars");
}

#[test]
fn test_schema_accepts_composite_key_upsert_sql() {
    let mut conn = setup_test_db();
    artcat_store::migrations::apply_migrations(&mut conn).unwrap();

    // The ON CONFLICT target must match the declared primary key
    conn.execute(
        "INSERT INTO artifacts (groupId, artifactId, version, lastUpdated)
         VALUES ('g', 'a', 'v', 1)
         ON CONFLICT(groupId, artifactId, version) DO UPDATE SET
            lastUpdated = excluded.lastUpdated",
        [],
    )
    .unwrap();
}
