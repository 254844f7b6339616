//! ArtCat store - SQLite persistence for the artifact catalog
//!
//! Provides:
//! - Connection management with pragmas suited to a single-writer
//!   embedded engine
//! - An embedded-SQL migration framework with checksums and idempotency
//! - The catalog repository: batch upsert and ordered offset pagination

pub mod catalog;
pub mod db;
pub mod errors;
pub mod migrations;

// Re-export key types
pub use errors::Result;
