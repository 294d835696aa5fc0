//! Database layer - connection pool, migrations and repositories
//!
//! # Design Principles
//!
//! - Connection pool, handed to repositories by reference
//! - Items are always read back in insertion (id) order
//! - Rely on DB constraints for list ownership, map violations to NotFound
//! - Transactions for multi-step operations

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
