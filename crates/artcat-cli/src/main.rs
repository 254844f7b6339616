//! ArtCat CLI
//!
//! Operator interface for cataloging artifacts from a remote binary
//! repository into a local SQLite database

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "artcat")]
#[command(about = "Catalog artifacts from a remote binary repository", long_about = None)]
struct Cli {
    /// Path to the catalog database
    #[arg(long, global = true, default_value = "artcat.db")]
    db: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List repositories available on the remote server
    Repos(commands::repos::ReposArgs),
    /// Fetch one repository's artifacts into the local catalog
    Sync(commands::sync::SyncArgs),
    /// Read one page of the local catalog
    Page(commands::page::PageArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Cli { db, command } = Cli::parse();

    let result = match command {
        Commands::Repos(args) => commands::repos::execute(&db, args).await,
        Commands::Sync(args) => commands::sync::execute(&db, args).await,
        Commands::Page(args) => commands::page::execute(&db, args),
    };

    if let Err(e) = result {
        if e.is_retryable() {
            eprintln!("Error [{}]: {} (retryable)", e.code(), e);
        } else {
            eprintln!("Error [{}]: {}", e.code(), e);
        }
        std::process::exit(1);
    }
}
