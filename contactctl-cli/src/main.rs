//! contactctl CLI - contact service and store access
//!
//! - `serve`: run the read-only contact HTTP API
//! - `contacts get|list|add`: call the contact store directly

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "contactctl",
    author,
    version,
    about = "Contact records over PostgreSQL: HTTP API and store access"
)]
struct Cli {
    /// Debug logging (when RUST_LOG is not set)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the `telemetry` feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the contact HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Read or insert contacts directly (get, list, add)
    Contacts(commands::contacts::ContactsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })
    .ok();

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Contacts(args) => commands::run_contacts(args).await,
    };

    tracing_setup::shutdown_otel();
    result
}
