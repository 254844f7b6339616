//! Fetch-to-store resolution pipeline
//!
//! Raw remote rows pass through the resolvers one by one; rejections are
//! counted and skipped rather than aborting the batch, so a sync with
//! some malformed paths still stores the well-formed subset.

use artcat_core::resolve::resolve_item;
use artcat_core::types::{CatalogRecord, RawCatalogItem};
use serde::Serialize;
use tracing::debug;

/// Records per upsert chunk; cancellation is checked between chunks.
pub(crate) const UPSERT_CHUNK: usize = 256;

/// Outcome of one repository sync
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub repository: String,
    /// Raw rows returned by the remote query
    pub fetched: usize,
    /// Records upserted into the catalog
    pub stored: usize,
    /// Rows rejected by path/timestamp resolution
    pub skipped: usize,
}

/// Resolve raw rows into catalog records, counting rejections
pub fn resolve_batch(items: &[RawCatalogItem]) -> (Vec<CatalogRecord>, usize) {
    let mut records = Vec::with_capacity(items.len());
    let mut skipped = 0;

    for item in items {
        match resolve_item(item) {
            Ok(record) => records.push(record),
            Err(rejection) => {
                debug!(path = %item.path, reason = %rejection, "skipping raw item");
                skipped += 1;
            }
        }
    }

    (records, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(path: &str, updated: &str) -> RawCatalogItem {
        RawCatalogItem {
            repository_key: "libs-release".to_string(),
            path: path.to_string(),
            updated_at: updated.to_string(),
        }
    }

    #[test]
    fn test_malformed_items_are_counted_not_fatal() {
        let items = vec![
            raw("com/example/my-artifact/1.0.0", "2024-04-01T10:15:30.000Z"),
            raw("onlytwo/parts", "2024-04-01T10:15:30.000Z"),
            raw("org/acme/widget/2.0", "not-a-date"),
        ];

        let (records, skipped) = resolve_batch(&items);

        assert_eq!(records.len(), 1);
        assert_eq!(skipped, 2);
        assert_eq!(records[0].group_id, "com.example");
        assert_eq!(records[0].artifact_id, "my-artifact");
        assert_eq!(records[0].version, "1.0.0");
    }

    #[test]
    fn test_empty_batch() {
        let (records, skipped) = resolve_batch(&[]);
        assert!(records.is_empty());
        assert_eq!(skipped, 0);
    }
}
