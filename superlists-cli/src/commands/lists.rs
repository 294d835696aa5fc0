//! Print stored lists and their items

use anyhow::{Context, Result};
use clap::Parser;
use superlists_core::{ListId, SuperlistsConfig};
use superlists_server::db::{create_pool_with_options, ItemRepo, ListRepo};

/// Arguments for the lists command
#[derive(Parser, Debug)]
pub struct ListsArgs {
    /// Only show this list
    pub id: Option<ListId>,

    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,
}

pub async fn run_lists(args: ListsArgs, settings: SuperlistsConfig) -> Result<()> {
    let url = args.database_url.unwrap_or(settings.database.url);
    let pool = create_pool_with_options(&url, settings.database.max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", url))?;

    let lists = ListRepo::new(&pool);
    let items = ItemRepo::new(&pool);

    let selected = match args.id {
        Some(id) => vec![lists.get(id).await.context("Failed to load list")?],
        None => lists.all().await.context("Failed to load lists")?,
    };

    if selected.is_empty() {
        println!("no lists");
        return Ok(());
    }

    for list in selected {
        let owned = items
            .list_for(list.id)
            .await
            .with_context(|| format!("Failed to load items for list {}", list.id))?;
        println!("list {} ({} items) {}", list.id, owned.len(), list.id.view_path());
        for (n, item) in owned.iter().enumerate() {
            println!("  {}: {}", n + 1, item.text);
        }
    }
    Ok(())
}
