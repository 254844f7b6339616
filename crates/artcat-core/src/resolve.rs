//! Path and timestamp resolution for raw catalog items
//!
//! A remote result row carries a hierarchical path and a date string.
//! Resolution turns the pair into a [`CatalogRecord`] or rejects the
//! whole item; items are never stored with blank fields or sentinel
//! timestamps.

use crate::types::{CatalogRecord, RawCatalogItem};
use chrono::DateTime;
use thiserror::Error;

/// Per-item rejection. Not fatal for a sync: the item is skipped and
/// counted, and the batch continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseRejection {
    #[error("path '{path}' has fewer than 3 segments")]
    TooFewSegments { path: String },

    #[error("path '{path}' yields an empty coordinate field")]
    EmptyField { path: String },

    #[error("unparsable timestamp '{raw}'")]
    BadTimestamp { raw: String },
}

/// Resolve a repository-relative path into (group_id, artifact_id, version).
///
/// The path follows a Maven-style layout where the groupId's dots were
/// already expanded into path segments: the last segment is the version,
/// the second-to-last is the artifactId, and everything before that joins
/// with `.` into the groupId. Anything that round-trips through split/join
/// is accepted; there is no validation of character content.
pub fn resolve_coordinate(path: &str) -> Result<(String, String, String), ParseRejection> {
    let segments: Vec<&str> = path.split('/').collect();
    if segments.len() < 3 {
        return Err(ParseRejection::TooFewSegments {
            path: path.to_string(),
        });
    }

    let version = segments[segments.len() - 1];
    let artifact_id = segments[segments.len() - 2];
    let group_id = segments[..segments.len() - 2].join(".");

    // Leading/trailing empty segments from a malformed path (e.g. "/a/b/")
    // can blank out a field; discard the item rather than store blanks.
    if group_id.is_empty() || artifact_id.is_empty() || version.is_empty() {
        return Err(ParseRejection::EmptyField {
            path: path.to_string(),
        });
    }

    Ok((group_id, artifact_id.to_string(), version.to_string()))
}

/// Resolve a raw date string into epoch milliseconds.
///
/// The remote reports RFC 3339 date-times (e.g. `2024-04-01T10:15:30.000Z`
/// or with a numeric offset). Anything else rejects the item.
pub fn resolve_timestamp(raw: &str) -> Result<i64, ParseRejection> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.timestamp_millis())
        .map_err(|_| ParseRejection::BadTimestamp {
            raw: raw.to_string(),
        })
}

/// Resolve one raw item into a catalog record, or reject it whole.
pub fn resolve_item(item: &RawCatalogItem) -> Result<CatalogRecord, ParseRejection> {
    let (group_id, artifact_id, version) = resolve_coordinate(&item.path)?;
    let last_updated_ms = resolve_timestamp(&item.updated_at)?;
    Ok(CatalogRecord {
        group_id,
        artifact_id,
        version,
        last_updated_ms,
    })
}
