//! HTTP server layer
//!
//! Axum server with:
//! - HTML pages and 302 redirects after POST
//! - Request tracing
//! - Graceful shutdown
//! - HTML error pages with mapped status codes

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{router, run_server, AppState, ServerConfig, ServerError, MAX_FORM_BYTES};
