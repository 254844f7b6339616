//! Migration framework
//!
//! Embedded SQL migrations applied idempotently at startup

mod checksums;
mod embedded;
mod runner;

pub use runner::apply_migrations;
