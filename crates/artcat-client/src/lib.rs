//! ArtCat client - HTTP access to the remote binary-repository server
//!
//! Provides:
//! - `CatalogClient` with the two remote operations (list repositories,
//!   query artifacts of one repository via AQL)
//! - AQL query construction with literal escaping
//! - Mapping from HTTP outcomes to the shared error taxonomy
//!
//! One attempt per call; retry/backoff belongs to the caller.

pub mod aql;
mod client;

pub use client::CatalogClient;
