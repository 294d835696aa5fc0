//! Repository implementations for database access
//!
//! Each repository borrows the pool and follows these patterns:
//! - Rows are mapped through `FromRow` structs into core domain types
//! - Foreign-key violations surface as `DbError::NotFound`
//! - Transactions for multi-step operations

pub mod items;
pub mod lists;

pub use items::ItemRepo;
pub use lists::ListRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn list_not_found(id: superlists_core::ListId) -> Self {
        Self::NotFound {
            resource: "list",
            id: id.to_string(),
        }
    }
}
