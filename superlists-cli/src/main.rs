//! superlists CLI - to-do lists web app
//!
//! - `serve`: run the HTTP server (migrates the schema first)
//! - `migrate`: apply or inspect schema migrations
//! - `lists`: print stored lists and their items
//! - `config`: show where configuration comes from and what it resolves to

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "superlists",
    author,
    version,
    about = "Minimal to-do lists web app backed by SQLite"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (default: ~/.superlists/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Apply pending schema migrations
    Migrate(commands::migrate::MigrateArgs),
    /// Print stored lists and their items
    Lists(commands::lists::ListsArgs),
    /// Inspect configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    let settings = config::resolve(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, settings).await?,
        Commands::Migrate(args) => commands::run_migrate(args, settings).await?,
        Commands::Lists(args) => commands::run_lists(args, settings).await?,
        Commands::Config(args) => config::run_config(args, cli.config.as_deref(), &settings)?,
    }
    Ok(())
}
