//! ArtCat engine - the catalog service and its typed command surface
//!
//! Wires the remote client, the resolvers, and the store into the three
//! logical operations a presentation layer calls: list repositories,
//! sync one repository, read one catalog page.

pub mod commands;
pub mod service;
pub mod sync;

// Re-export key types
pub use service::CatalogService;
pub use sync::SyncReport;
