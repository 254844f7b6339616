//! Catalog service
//!
//! One explicit service object constructed at startup holds the store
//! connection, the HTTP client, and a per-repository single-flight set.
//! No ambient globals; every operation goes through this struct.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Mutex;

use artcat_client::CatalogClient;
use artcat_core::errors::{CatalogError, Result};
use artcat_core::types::{ArtifactPage, Credentials};
use artcat_store::catalog::CatalogRepo;
use rusqlite::Connection;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::sync::{resolve_batch, SyncReport, UPSERT_CHUNK};

/// The artifact catalog service
pub struct CatalogService {
    client: CatalogClient,
    conn: Mutex<Connection>,
    in_flight: Mutex<HashSet<String>>,
}

impl CatalogService {
    /// Open (or create) the catalog database at the given path and
    /// ensure its schema
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        Self::from_connection(artcat_store::db::open(db_path)?)
    }

    /// Service over an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(artcat_store::db::open_in_memory()?)
    }

    fn from_connection(mut conn: Connection) -> Result<Self> {
        artcat_store::db::configure(&conn)?;
        artcat_store::migrations::apply_migrations(&mut conn)?;
        Ok(Self {
            client: CatalogClient::new()?,
            conn: Mutex::new(conn),
            in_flight: Mutex::new(HashSet::new()),
        })
    }

    /// List the repository keys known to the remote server
    pub async fn list_repositories(
        &self,
        base_url: &str,
        credentials: &Credentials,
    ) -> Result<Vec<String>> {
        self.client.list_repositories(base_url, credentials).await
    }

    /// Fetch one repository's artifacts and upsert them into the catalog.
    ///
    /// A full refresh every time; there is no incremental resume. Per-item
    /// resolution failures are skipped and counted. At most one sync per
    /// repository key runs at a time; a concurrent attempt gets
    /// `SyncInFlight`. Cancellation aborts the remote query or stops
    /// between upsert chunks; records already applied are kept.
    pub async fn sync_repository(
        &self,
        base_url: &str,
        credentials: &Credentials,
        repository_key: &str,
        cancel: &CancellationToken,
    ) -> Result<SyncReport> {
        let _guard = FlightGuard::acquire(&self.in_flight, repository_key)?;

        let items = self
            .client
            .query_artifacts(base_url, credentials, repository_key, cancel)
            .await?;
        let fetched = items.len();
        let (records, skipped) = resolve_batch(&items);

        let mut stored = 0;
        {
            let conn = lock(&self.conn, "sync")?;
            for chunk in records.chunks(UPSERT_CHUNK) {
                if cancel.is_cancelled() {
                    warn!(
                        repository = repository_key,
                        stored, "sync cancelled mid-batch; applied records are kept"
                    );
                    return Err(CatalogError::Cancelled);
                }
                stored += CatalogRepo::upsert_batch(&conn, chunk)?;
            }
        }

        info!(
            repository = repository_key,
            fetched, stored, skipped, "sync complete"
        );
        Ok(SyncReport {
            repository: repository_key.to_string(),
            fetched,
            stored,
            skipped,
        })
    }

    /// Read one page of the catalog plus the unfiltered total.
    ///
    /// Reads are not isolated from a concurrent sync; a page may observe
    /// a partially applied batch.
    pub fn get_page(&self, page: u64, limit: u64) -> Result<ArtifactPage> {
        let conn = lock(&self.conn, "get_page")?;
        CatalogRepo::list_page(&conn, page, limit)
    }
}

fn lock<'a, T>(mutex: &'a Mutex<T>, op: &str) -> Result<std::sync::MutexGuard<'a, T>> {
    mutex
        .lock()
        .map_err(|_| CatalogError::storage(op, "store mutex poisoned"))
}

/// Holds one repository key in the in-flight set; removed on drop so the
/// key is released on success, error, and cancellation alike.
struct FlightGuard<'a> {
    set: &'a Mutex<HashSet<String>>,
    key: String,
}

impl<'a> FlightGuard<'a> {
    fn acquire(set: &'a Mutex<HashSet<String>>, key: &str) -> Result<Self> {
        let mut held = set
            .lock()
            .map_err(|_| CatalogError::storage("sync", "flight set mutex poisoned"))?;
        if !held.insert(key.to_string()) {
            return Err(CatalogError::SyncInFlight {
                repository: key.to_string(),
            });
        }
        Ok(Self {
            set,
            key: key.to_string(),
        })
    }
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut held) = self.set.lock() {
            held.remove(&self.key);
        }
    }
}
