//! Schema setup command

use anyhow::{Context, Result};
use clap::Parser;

use lunchly_server::db::migrations;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Postgres connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}

/// Create the customers and reservations tables if missing
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = super::connect(args.database_url, 1).await?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;
    pool.close().await;

    tracing::info!("Schema is up to date");
    Ok(())
}
