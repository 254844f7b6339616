//! Migration checksums
//!
//! SHA-256 over the migration SQL, recorded alongside the applied
//! migration so drift in an already-applied file is detectable

use sha2::{Digest, Sha256};

/// Compute the hex-encoded SHA-256 checksum of a migration's SQL
pub fn compute_checksum(sql: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(sql.as_bytes());
    hex::encode(hasher.finalize())
}
