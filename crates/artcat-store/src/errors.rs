//! Storage error helpers
//!
//! Maps rusqlite failures into the shared taxonomy's Storage kind

use artcat_core::errors::CatalogError;

/// Result type alias using CatalogError
pub use artcat_core::errors::Result;

/// Create a storage error from a rusqlite::Error, tagged with the
/// failing operation
pub fn from_rusqlite(op: &str, err: rusqlite::Error) -> CatalogError {
    CatalogError::storage(op, err)
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> CatalogError {
    CatalogError::storage(
        "migration",
        format!("migration {} failed: {}", migration_id, reason),
    )
}
