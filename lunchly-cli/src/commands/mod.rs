//! Command implementations for the lunchly CLI

pub mod migrate;
pub mod serve;

use anyhow::{Context, Result};
use lunchly_server::db::{create_pool_with_options, PgPool};

pub use migrate::run_migrate;
pub use serve::run_serve;

const MISSING_DATABASE_URL: &str =
    "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or a .env file";

/// Resolve the database URL and open a pool.
async fn connect(database_url: Option<String>, max_connections: u32) -> Result<PgPool> {
    let database_url = database_url
        .filter(|url| !url.trim().is_empty())
        .context(MISSING_DATABASE_URL)?;

    create_pool_with_options(&database_url, max_connections)
        .await
        .context("Failed to create database pool")
}
