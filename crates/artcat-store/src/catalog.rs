//! Catalog repository
//!
//! Upserts artifact coordinates into the artifacts table and reads them
//! back as offset-paginated pages with a total count.

use crate::errors::{from_rusqlite, Result};
use artcat_core::errors::CatalogError;
use artcat_core::types::{ArtifactPage, CatalogRecord};
use rusqlite::Connection;
use tracing::debug;

/// SQLite repository for catalog records
pub struct CatalogRepo;

impl CatalogRepo {
    /// Upsert one record, replacing any existing row with the same
    /// (groupId, artifactId, version) key. Last write wins on every field.
    pub fn upsert(conn: &Connection, record: &CatalogRecord) -> Result<()> {
        conn.execute(
            "INSERT INTO artifacts (groupId, artifactId, version, lastUpdated)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(groupId, artifactId, version) DO UPDATE SET
                lastUpdated = excluded.lastUpdated",
            rusqlite::params![
                record.group_id,
                record.artifact_id,
                record.version,
                record.last_updated_ms,
            ],
        )
        .map_err(|e| from_rusqlite("upsert", e))?;

        Ok(())
    }

    /// Upsert a batch of records, applied independently in order.
    ///
    /// The batch is NOT atomic as a whole: if one record's write fails,
    /// earlier records in the same batch remain committed. Callers that
    /// need all-or-nothing semantics must implement that externally.
    pub fn upsert_batch(conn: &Connection, records: &[CatalogRecord]) -> Result<usize> {
        let mut applied = 0;
        for record in records {
            Self::upsert(conn, record)?;
            applied += 1;
        }
        Ok(applied)
    }

    /// Unfiltered row count of the artifacts table
    pub fn count(conn: &Connection) -> Result<u64> {
        conn.query_row("SELECT COUNT(*) FROM artifacts", [], |row| {
            row.get::<_, i64>(0)
        })
        .map(|n| n as u64)
        .map_err(|e| from_rusqlite("count", e))
    }

    /// Read one page of records plus the unfiltered total.
    ///
    /// `page` and `limit` are 1-based; offset is `(page - 1) * limit`.
    /// Rows come back ascending by (groupId, artifactId, version) so
    /// repeated reads against an unchanged store always yield the same
    /// sequence.
    pub fn list_page(conn: &Connection, page: u64, limit: u64) -> Result<ArtifactPage> {
        if page < 1 {
            return Err(CatalogError::InvalidInput("page must be >= 1".to_string()));
        }
        if limit < 1 {
            return Err(CatalogError::InvalidInput("limit must be >= 1".to_string()));
        }

        let offset = (page - 1) * limit;
        let mut stmt = conn
            .prepare(
                "SELECT groupId, artifactId, version, lastUpdated FROM artifacts
                 ORDER BY groupId, artifactId, version
                 LIMIT ?1 OFFSET ?2",
            )
            .map_err(|e| from_rusqlite("list_page", e))?;

        let records: Vec<CatalogRecord> = stmt
            .query_map(
                rusqlite::params![limit as i64, offset as i64],
                |row| {
                    Ok(CatalogRecord {
                        group_id: row.get(0)?,
                        artifact_id: row.get(1)?,
                        version: row.get(2)?,
                        last_updated_ms: row.get(3)?,
                    })
                },
            )
            .map_err(|e| from_rusqlite("list_page", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("list_page", e))?;
        drop(stmt);

        let total = Self::count(conn)?;
        debug!(page, limit, returned = records.len(), total, "listed catalog page");

        Ok(ArtifactPage {
            records,
            total,
            page,
            limit,
        })
    }
}
