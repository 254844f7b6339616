//! ArtCat core - domain types, resolvers, and pagination arithmetic
//!
//! Provides:
//! - Shared types for the catalog pipeline (raw items, records, credentials)
//! - The error taxonomy shared by all crates
//! - Path and timestamp resolution for raw catalog items
//! - The windowed pagination calculator for UI controls
//!
//! Everything in this crate is pure; no I/O happens here.

pub mod errors;
pub mod paging;
pub mod resolve;
pub mod sensitive;
pub mod types;

// Re-export key types
pub use errors::{CatalogError, Result};
pub use sensitive::Sensitive;
