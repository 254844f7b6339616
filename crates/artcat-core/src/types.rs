//! Shared data types for the catalog pipeline

use crate::sensitive::Sensitive;
use serde::Serialize;

/// HTTP Basic credentials for the remote repository server
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    /// API key used as the Basic-auth password; redacted in Debug output
    pub api_key: Sensitive<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: Sensitive::new(api_key.into()),
        }
    }
}

/// One raw row from a remote query result
///
/// Ephemeral: produced per sync call, discarded after resolution. Never
/// persisted in this form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCatalogItem {
    pub repository_key: String,
    /// Hierarchical `/`-separated path, repository-relative, no file name
    pub path: String,
    /// Raw date string as reported by the remote (`updated` field)
    pub updated_at: String,
}

/// A persisted artifact coordinate
///
/// Primary key is (`group_id`, `artifact_id`, `version`); upserts replace
/// the row wholesale, so `last_updated_ms` is last-write-wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogRecord {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    /// Epoch milliseconds
    pub last_updated_ms: i64,
}

/// One page of catalog records plus the unfiltered total
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactPage {
    /// Records for this page, ascending by (group_id, artifact_id, version)
    pub records: Vec<CatalogRecord>,
    /// Total row count across the whole table
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}
