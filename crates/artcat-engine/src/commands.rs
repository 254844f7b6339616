//! Typed command surface for the presentation layer
//!
//! One variant per logical operation, each with a statically defined
//! request and response shape; replaces string-keyed channel dispatch.

use artcat_core::errors::Result;
use artcat_core::types::{ArtifactPage, Credentials};
use tokio_util::sync::CancellationToken;

use crate::service::CatalogService;
use crate::sync::SyncReport;

/// Commands accepted by the catalog service
#[derive(Debug, Clone)]
pub enum CatalogCommand {
    /// List repositories available on the remote server
    ListRepositories {
        base_url: String,
        credentials: Credentials,
    },
    /// Fetch one repository's artifacts into the local catalog
    SyncRepository {
        base_url: String,
        credentials: Credentials,
        repository_key: String,
    },
    /// Read one page of the local catalog
    GetPage { page: u64, limit: u64 },
}

/// Result of applying a catalog command
#[derive(Debug)]
pub enum CatalogCommandResult {
    Repositories(Vec<String>),
    Sync(SyncReport),
    Page(ArtifactPage),
}

/// Apply a catalog command against the service
pub async fn apply_command(
    service: &CatalogService,
    command: CatalogCommand,
    cancel: &CancellationToken,
) -> Result<CatalogCommandResult> {
    match command {
        CatalogCommand::ListRepositories {
            base_url,
            credentials,
        } => {
            let keys = service.list_repositories(&base_url, &credentials).await?;
            Ok(CatalogCommandResult::Repositories(keys))
        }
        CatalogCommand::SyncRepository {
            base_url,
            credentials,
            repository_key,
        } => {
            let report = service
                .sync_repository(&base_url, &credentials, &repository_key, cancel)
                .await?;
            Ok(CatalogCommandResult::Sync(report))
        }
        CatalogCommand::GetPage { page, limit } => {
            Ok(CatalogCommandResult::Page(service.get_page(page, limit)?))
        }
    }
}
