//! CLI for schema migrations and sample data
//!
//! Outputs one JSON line per command so scripts can parse the result.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ideas_core::domains::projects::actions::seed_welcome_project;
use ideas_core::kernel::PostgresStore;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "migrate_cli")]
#[command(about = "Database migration and seed CLI")]
struct Cli {
    /// Postgres connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending schema migrations
    Run,

    /// Apply migrations, then insert the welcome project into an empty board
    Seed,
}

#[derive(Serialize)]
struct Response {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_id: Option<String>,
}

fn output(resp: &Response) -> Result<()> {
    println!("{}", serde_json::to_string(resp)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let store = PostgresStore::connect(&cli.database_url).await?;

    match cli.command {
        Commands::Run => cmd_run(&store).await,
        Commands::Seed => cmd_seed(&store).await,
    }
}

async fn cmd_run(store: &PostgresStore) -> Result<()> {
    store.migrate().await?;
    output(&Response {
        success: true,
        message: Some("Migrations complete".to_string()),
        project_id: None,
    })
}

async fn cmd_seed(store: &PostgresStore) -> Result<()> {
    store.migrate().await?;

    let seeded = seed_welcome_project(store)
        .await
        .context("Failed to seed welcome project")?;

    output(&Response {
        success: true,
        message: Some(match &seeded {
            Some(_) => "Sample project created".to_string(),
            None => "Projects already exist, nothing seeded".to_string(),
        }),
        project_id: seeded.map(|p| p.id.to_string()),
    })
}
