//! lunchly CLI - restaurant customer and reservation manager
//!
//! - `serve`: run the web interface against Postgres (or in memory)
//! - `migrate`: create the schema and exit

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "lunchly",
    author,
    version,
    about = "Customer and reservation manager for a small restaurant",
    long_about = "Serve the lunchly web pages for browsing customers, booking reservations \
                  and listing the ten most frequent guests. Settings are read from flags, \
                  the environment, or a .env file in the working directory."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Create tables and indexes, then exit
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is normal; real env vars win either way
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
    }
    Ok(())
}
