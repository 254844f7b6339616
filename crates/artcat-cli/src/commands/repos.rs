//! `repos` subcommand: list repositories on the remote server

use artcat_core::errors::Result;
use artcat_engine::commands::{apply_command, CatalogCommand, CatalogCommandResult};
use artcat_engine::CatalogService;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReposArgs {
    /// Base URL of the repository server, e.g. https://example.jfrog.io
    #[arg(long)]
    pub url: String,

    #[arg(long)]
    pub username: String,

    /// API key; falls back to the ARTCAT_API_KEY environment variable
    #[arg(long)]
    pub api_key: Option<String>,
}

pub async fn execute(db: &str, args: ReposArgs) -> Result<()> {
    let credentials = super::credentials(args.username, args.api_key)?;
    let service = CatalogService::open(db)?;
    let cancel = super::cancel_on_ctrl_c();

    let result = apply_command(
        &service,
        CatalogCommand::ListRepositories {
            base_url: args.url,
            credentials,
        },
        &cancel,
    )
    .await?;

    match result {
        CatalogCommandResult::Repositories(keys) => {
            for key in keys {
                println!("{key}");
            }
            Ok(())
        }
        _ => unreachable!("ListRepositories returns Repositories"),
    }
}
