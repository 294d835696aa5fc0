//! Command implementations for the superlists CLI

pub mod lists;
pub mod migrate;
pub mod serve;

// Re-export dispatcher functions for flat access from main.rs
pub use lists::run_lists;
pub use migrate::run_migrate;
pub use serve::run_serve;
