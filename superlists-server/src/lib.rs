//! superlists-server: to-do lists over HTTP
//!
//! - [`db`]: SQLite pool, schema migrations and repositories
//! - [`templates`]: HTML pages rendered from typed view models
//! - [`http`]: axum router, handlers and error mapping

pub mod db;
pub mod http;
pub mod templates;

pub use http::{router, run_server, AppState, ServerConfig, ServerError, MAX_FORM_BYTES};
