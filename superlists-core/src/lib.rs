//! superlists-core: domain types shared by the server and the CLI
//!
//! - [`model`]: lists, items and their identifiers
//! - [`validation`]: submitted form values, checked at construction
//! - [`config`]: `~/.superlists/config.toml`

pub mod config;
pub mod error;
pub mod model;
pub mod validation;

pub use config::{DatabaseConfig, ServerSection, SuperlistsConfig};
pub use error::{CoreError, Result};
pub use model::{Item, ItemId, ListId, TodoList};
pub use validation::{ItemText, ValidationError};
