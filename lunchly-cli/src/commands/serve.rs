//! HTTP server command
//!
//! Runs the lunchly pages against Postgres, or against an in-memory store
//! with `--in-memory` (nothing survives a restart).

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use lunchly_server::db::{migrations, pool::DEFAULT_MAX_CONNECTIONS};
use lunchly_server::{run_server, MemoryStore, PgStore, ServerConfig, Store};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "LUNCHLY_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Postgres connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Keep everything in memory instead of Postgres (ignores the database URL)
    #[arg(long)]
    pub in_memory: bool,

    /// Skip creating tables on startup
    #[arg(long)]
    pub no_migrate: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn Store> = if args.in_memory {
        tracing::warn!("Using in-memory store; data is lost on shutdown");
        Arc::new(MemoryStore::new())
    } else {
        let pool = super::connect(args.database_url, args.max_connections).await?;
        if !args.no_migrate {
            migrations::run(&pool)
                .await
                .context("Failed to run migrations")?;
        }
        Arc::new(PgStore::new(pool))
    };

    tracing::info!("Starting lunchly on http://{}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Blocks until Ctrl+C / SIGTERM
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
