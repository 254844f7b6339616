//! Error taxonomy for catalog operations
//!
//! Every failure that crosses a component boundary is one of the kinds
//! below, each with a stable error code for programmatic handling.
//! Per-item parse failures are deliberately NOT part of this taxonomy;
//! they are [`crate::resolve::ParseRejection`] values that the sync
//! pipeline aggregates into a skip count instead of surfacing.

use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Canonical error taxonomy for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Transport-level failure before an HTTP status was obtained.
    /// Retryable by the caller.
    #[error("network failure for {url}: {message}")]
    Network { url: String, message: String },

    /// The remote rejected the credentials (HTTP 401/403).
    /// Not retryable without new credentials.
    #[error("authentication rejected by remote (HTTP {status})")]
    Auth { status: u16 },

    /// Any other non-2xx response from the remote.
    #[error("remote returned HTTP {status}: {body}")]
    Remote { status: u16, body: String },

    /// The remote answered 2xx but the body did not have the expected
    /// shape. The sync is aborted; nothing from the response is stored.
    #[error("malformed remote response: {message}")]
    MalformedResponse { message: String },

    /// Schema, write, or read failure on the persisted table. Fatal for
    /// the operation and surfaced whole, never partially recovered.
    #[error("storage failure during {op}: {message}")]
    Storage { op: String, message: String },

    /// The operation was cancelled. Records already upserted stay put;
    /// cancellation only stops further progress.
    #[error("operation cancelled")]
    Cancelled,

    /// A sync for this repository key is already running.
    #[error("sync already in flight for repository '{repository}'")]
    SyncInFlight { repository: String },

    /// A caller-supplied argument was out of range or missing.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl CatalogError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::Network { .. } => "ERR_NETWORK",
            CatalogError::Auth { .. } => "ERR_AUTH",
            CatalogError::Remote { .. } => "ERR_REMOTE",
            CatalogError::MalformedResponse { .. } => "ERR_MALFORMED_RESPONSE",
            CatalogError::Storage { .. } => "ERR_STORAGE",
            CatalogError::Cancelled => "ERR_CANCELLED",
            CatalogError::SyncInFlight { .. } => "ERR_SYNC_IN_FLIGHT",
            CatalogError::InvalidInput(_) => "ERR_INVALID_INPUT",
        }
    }

    /// Whether the caller can reasonably retry the same operation
    /// without changing anything.
    pub fn is_retryable(&self) -> bool {
        match self {
            CatalogError::Network { .. } => true,
            CatalogError::Remote { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Create a storage error for the given operation
    pub fn storage(op: impl Into<String>, message: impl std::fmt::Display) -> Self {
        CatalogError::Storage {
            op: op.into(),
            message: message.to_string(),
        }
    }

    /// Create a malformed-response error
    pub fn malformed(message: impl Into<String>) -> Self {
        CatalogError::MalformedResponse {
            message: message.into(),
        }
    }
}
