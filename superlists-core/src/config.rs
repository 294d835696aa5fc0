//! Configuration file: `~/.superlists/config.toml`
//!
//! Every key is optional. A missing file means defaults. Environment
//! variables (`DATABASE_URL`, `SUPERLISTS_BIND`) override file values;
//! the CLI applies its own flags last.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Default bind address for `superlists serve`
pub const DEFAULT_BIND: ([u8; 4], u16) = ([127, 0, 0, 1], 8000);

/// Default database location, relative to the working directory
pub const DEFAULT_DATABASE_URL: &str = "sqlite://superlists.db";

/// Default maximum connections for the pool.
/// Kept low for a single-process app.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuperlistsConfig {
    pub server: ServerSection,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: SocketAddr,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(DEFAULT_BIND),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl SuperlistsConfig {
    /// Load config from `path`, then apply process environment overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::load_from(path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| CoreError::config_parse(path, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Get config file path: ~/.superlists/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".superlists/config.toml")
    }

    /// Apply `DATABASE_URL` and `SUPERLISTS_BIND` from `lookup`.
    ///
    /// Takes a lookup function rather than reading the process environment
    /// directly so callers (and tests) control the source.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL").filter(|v| !v.is_empty()) {
            self.database.url = url;
        }

        if let Some(bind) = lookup("SUPERLISTS_BIND").filter(|v| !v.is_empty()) {
            self.server.bind = bind
                .parse()
                .map_err(|_| CoreError::config(format!("SUPERLISTS_BIND '{}' is not an address", bind)))?;
        }

        Ok(())
    }

    /// Reject values the server cannot start with.
    pub fn validate(&self) -> Result<()> {
        if self.database.url.trim().is_empty() {
            return Err(CoreError::config("database.url cannot be empty"));
        }
        if self.database.max_connections == 0 {
            return Err(CoreError::config("database.max_connections must be at least 1"));
        }
        Ok(())
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
