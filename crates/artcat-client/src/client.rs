//! Remote catalog client implementation

use std::time::Duration;

use artcat_core::errors::{CatalogError, Result};
use artcat_core::types::{Credentials, RawCatalogItem};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::aql;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("artcat/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the remote binary-repository server
///
/// Both operations authenticate with HTTP Basic credentials (username +
/// API key) and perform exactly one attempt; transport failures, auth
/// rejections, other non-2xx statuses, and shape mismatches map to the
/// corresponding [`CatalogError`] kinds.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
}

/// One entry of the repository listing; extra fields are ignored
#[derive(Debug, Deserialize)]
struct RepositoryEntry {
    key: String,
}

/// AQL response envelope. A missing or non-array `results` fails the
/// decode and aborts the sync.
#[derive(Debug, Deserialize)]
struct AqlResponse {
    results: Vec<AqlRow>,
}

/// One AQL result row. `path`/`updated` default to empty when absent so
/// the row becomes a per-item rejection downstream instead of failing
/// the whole response.
#[derive(Debug, Deserialize)]
struct AqlRow {
    #[serde(default)]
    path: String,
    #[serde(default)]
    updated: String,
}

impl CatalogClient {
    /// Create a client with default timeout and user agent
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| CatalogError::InvalidInput(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http })
    }

    /// List the repository keys known to the remote server.
    ///
    /// GET `{base_url}/artifactory/api/repositories`; the result preserves
    /// the response order.
    pub async fn list_repositories(
        &self,
        base_url: &str,
        credentials: &Credentials,
    ) -> Result<Vec<String>> {
        let url = format!(
            "{}/artifactory/api/repositories",
            base_url.trim_end_matches('/')
        );
        debug!(url = %url, "listing repositories");

        let response = self
            .http
            .get(&url)
            .basic_auth(&credentials.username, Some(credentials.api_key.expose()))
            .send()
            .await
            .map_err(|e| network_error(&url, &e))?;
        let body = check_status(&url, response).await?;

        let entries: Vec<RepositoryEntry> = serde_json::from_str(&body).map_err(|e| {
            CatalogError::malformed(format!(
                "repository listing is not a JSON array of keyed objects: {e}"
            ))
        })?;

        let keys: Vec<String> = entries.into_iter().map(|entry| entry.key).collect();
        info!(count = keys.len(), "repository listing returned");
        Ok(keys)
    }

    /// Query every artifact of one repository via AQL.
    ///
    /// POST `{base_url}/artifactory/api/search/aql` with a plain-text
    /// `items.find` expression; the repository key is escaped before
    /// interpolation. Cancelling the token aborts the in-flight request.
    pub async fn query_artifacts(
        &self,
        base_url: &str,
        credentials: &Credentials,
        repository_key: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<RawCatalogItem>> {
        if cancel.is_cancelled() {
            return Err(CatalogError::Cancelled);
        }

        let url = format!(
            "{}/artifactory/api/search/aql",
            base_url.trim_end_matches('/')
        );
        let query = aql::find_items_in_repo(repository_key);
        debug!(url = %url, repository = %repository_key, "querying artifacts");

        let request = self
            .http
            .post(&url)
            .basic_auth(&credentials.username, Some(credentials.api_key.expose()))
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(query);

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(CatalogError::Cancelled),
            result = request.send() => result.map_err(|e| network_error(&url, &e))?,
        };
        let body = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(CatalogError::Cancelled),
            body = check_status(&url, response) => body?,
        };

        let decoded: AqlResponse = serde_json::from_str(&body).map_err(|e| {
            CatalogError::malformed(format!("AQL response has no usable 'results' array: {e}"))
        })?;

        info!(
            repository = %repository_key,
            results = decoded.results.len(),
            "AQL query returned"
        );

        Ok(decoded
            .results
            .into_iter()
            .map(|row| RawCatalogItem {
                repository_key: repository_key.to_string(),
                path: row.path,
                updated_at: row.updated,
            })
            .collect())
    }
}

/// Map an HTTP response to its body text, or to the taxonomy error for
/// its status: 401/403 -> Auth, other non-2xx -> Remote.
async fn check_status(url: &str, response: Response) -> Result<String> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(CatalogError::Auth {
            status: status.as_u16(),
        });
    }
    let body = response
        .text()
        .await
        .map_err(|e| network_error(url, &e))?;
    if !status.is_success() {
        return Err(CatalogError::Remote {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

fn network_error(url: &str, err: &reqwest::Error) -> CatalogError {
    CatalogError::Network {
        url: url.to_string(),
        message: err.to_string(),
    }
}
