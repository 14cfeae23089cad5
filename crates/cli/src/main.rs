//! Folio CLI - schema setup, content seeding, and analytics reports.
//!
//! # Usage
//!
//! ```bash
//! # Create tables and indexes (safe to re-run)
//! folio-cli db init
//!
//! # Load projects and tech stack entries from YAML
//! folio-cli seed crates/cli/seed/portfolio.yaml
//!
//! # Replace existing projects and tech stack entries
//! folio-cli seed crates/cli/seed/portfolio.yaml --clear
//!
//! # Visit summary for the last week
//! folio-cli stats --days 7
//! ```
//!
//! All commands read the same environment as the server
//! (`FOLIO_DATABASE_URL`, falling back to `DATABASE_URL`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "folio-cli")]
#[command(author, version, about = "Folio CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database management
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
    /// Seed projects and tech stack entries from a YAML file
    Seed {
        /// Path to the YAML file
        file: PathBuf,

        /// Delete existing projects and tech stack entries first
        #[arg(long)]
        clear: bool,
    },
    /// Print the page visit summary
    Stats {
        /// Trailing window in days
        #[arg(short, long, default_value_t = 30)]
        days: i32,

        /// Only break down visits to this page
        #[arg(short, long)]
        page_path: Option<String>,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Apply the schema (idempotent)
    Init,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Db { action } => match action {
            DbAction::Init => commands::db::init().await?,
        },
        Commands::Seed { file, clear } => commands::seed::from_file(&file, clear).await?,
        Commands::Stats { days, page_path } => {
            commands::stats::print(days, page_path.as_deref()).await?;
        }
    }
    Ok(())
}
