//! CLI subcommands

pub mod page;
pub mod repos;
pub mod sync;

use artcat_core::errors::{CatalogError, Result};
use artcat_core::types::Credentials;
use tokio_util::sync::CancellationToken;

/// Environment variable consulted when --api-key is not passed
pub const API_KEY_ENV: &str = "ARTCAT_API_KEY";

/// Build credentials from the flag or the environment
pub fn credentials(username: String, api_key: Option<String>) -> Result<Credentials> {
    let api_key = match api_key {
        Some(key) => key,
        None => std::env::var(API_KEY_ENV).map_err(|_| {
            CatalogError::InvalidInput(format!(
                "no API key: pass --api-key or set {API_KEY_ENV}"
            ))
        })?,
    };
    Ok(Credentials::new(username, api_key))
}

/// Cancellation token that fires on Ctrl-C
pub fn cancel_on_ctrl_c() -> CancellationToken {
    let token = CancellationToken::new();
    let child = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupt received; cancelling in-flight work");
            child.cancel();
        }
    });
    token
}
