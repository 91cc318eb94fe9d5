//! HTTP server command
//!
//! Connects the pool first, then serves the contact routes on it.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use contactctl_server::db::connect;
use contactctl_server::http::{run_server, ServerConfig};
use contactctl_server::DatabaseConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides CONTACTS_DB_* variables)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = DatabaseConfig::from_env().with_url(args.database_url);

    tracing::info!(
        db = %db_config.describe(),
        "Starting contactctl server on {}",
        args.bind
    );

    let pool = connect(&db_config)
        .await
        .context("Failed to create database pool")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
