//! `sync` subcommand: full refresh of one repository into the catalog

use artcat_core::errors::Result;
use artcat_engine::commands::{apply_command, CatalogCommand, CatalogCommandResult};
use artcat_engine::CatalogService;
use clap::Args;

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Base URL of the repository server, e.g. https://example.jfrog.io
    #[arg(long)]
    pub url: String,

    #[arg(long)]
    pub username: String,

    /// API key; falls back to the ARTCAT_API_KEY environment variable
    #[arg(long)]
    pub api_key: Option<String>,

    /// Repository key to sync
    #[arg(long)]
    pub repository: String,

    /// Emit the sync report as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(db: &str, args: SyncArgs) -> Result<()> {
    let credentials = super::credentials(args.username, args.api_key)?;
    let service = CatalogService::open(db)?;
    let cancel = super::cancel_on_ctrl_c();

    let result = apply_command(
        &service,
        CatalogCommand::SyncRepository {
            base_url: args.url,
            credentials,
            repository_key: args.repository,
        },
        &cancel,
    )
    .await?;

    match result {
        CatalogCommandResult::Sync(report) => {
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).unwrap_or_default()
                );
            } else {
                println!("Synced repository '{}':", report.repository);
                println!("  fetched: {}", report.fetched);
                println!("  stored:  {}", report.stored);
                println!("  skipped: {}", report.skipped);
            }
            Ok(())
        }
        _ => unreachable!("SyncRepository returns Sync"),
    }
}
