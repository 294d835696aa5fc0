//! HTTP server command
//!
//! Opens the database, brings the schema up to date and serves until
//! Ctrl+C or SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use superlists_core::SuperlistsConfig;
use superlists_server::db::{create_pool_with_options, migrations};
use superlists_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (overrides config/environment)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Skip applying pending migrations on startup
    #[arg(long)]
    pub no_migrate: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, mut settings: SuperlistsConfig) -> Result<()> {
    if let Some(bind) = args.bind {
        settings.server.bind = bind;
    }
    if let Some(url) = args.database_url {
        settings.database.url = url;
    }

    tracing::info!("Starting superlists server on {}", settings.server.bind);

    let pool = create_pool_with_options(&settings.database.url, settings.database.max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", settings.database.url))?;

    if args.no_migrate {
        tracing::warn!("Skipping migrations; schema must already be current");
    } else {
        migrations::run(&pool)
            .await
            .context("Failed to migrate database")?;
    }

    // Run server (blocks until shutdown)
    run_server(pool, ServerConfig::from(&settings))
        .await
        .context("Server error")?;

    Ok(())
}
