use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use superlists_core::SuperlistsConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
}

/// Load the config file (explicit path or default), then apply environment overrides.
pub fn resolve(path: Option<&Path>) -> Result<SuperlistsConfig> {
    let path = config_file(path);
    SuperlistsConfig::load(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

fn config_file(path: Option<&Path>) -> PathBuf {
    path.map(Path::to_path_buf)
        .unwrap_or_else(SuperlistsConfig::config_path)
}

pub fn run_config(args: ConfigArgs, path: Option<&Path>, config: &SuperlistsConfig) -> Result<()> {
    match args.command {
        ConfigCommands::Path => {
            println!("{}", config_file(path).display());
        }
        ConfigCommands::Show => {
            let rendered = config
                .to_toml_string()
                .context("Failed to render configuration")?;
            print!("{}", rendered);
        }
    }
    Ok(())
}
