//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;
use superlists_core::SuperlistsConfig;
use superlists_server::db::{create_pool_with_options, migrations};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Only report applied and pending migrations
    #[arg(long)]
    pub status: bool,
}

pub async fn run_migrate(args: MigrateArgs, settings: SuperlistsConfig) -> Result<()> {
    let url = args.database_url.unwrap_or(settings.database.url);
    let pool = create_pool_with_options(&url, settings.database.max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", url))?;

    if args.status {
        let applied = migrations::applied(&pool)
            .await
            .context("Failed to read migration history")?;
        for migration in migrations::MIGRATIONS {
            let mark = if applied.contains(&migration.version) {
                "applied"
            } else {
                "pending"
            };
            println!("{:>4}  {:<16} {}", migration.version, migration.name, mark);
        }
        return Ok(());
    }

    let count = migrations::run(&pool)
        .await
        .context("Failed to migrate database")?;
    println!(
        "applied {} migration(s); schema at version {}",
        count,
        migrations::latest_version()
    );
    Ok(())
}
