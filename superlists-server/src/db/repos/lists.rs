//! List repository
//!
//! Lists carry no attributes beyond their id. They are created either on
//! their own or together with their first item, and never changed.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use superlists_core::{Item, ItemText, ListId, TodoList};

use super::items::ItemRow;
use super::DbError;

/// List record from database
#[derive(Debug, Clone, FromRow)]
pub(crate) struct ListRow {
    pub id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<ListRow> for TodoList {
    fn from(row: ListRow) -> Self {
        Self {
            id: ListId(row.id),
            created_at: row.created_at,
        }
    }
}

/// List repository
pub struct ListRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ListRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create an empty list.
    pub async fn create(&self) -> Result<TodoList, DbError> {
        let row: ListRow =
            sqlx::query_as("INSERT INTO list (created_at) VALUES (?) RETURNING id, created_at")
                .bind(Utc::now())
                .fetch_one(self.pool)
                .await?;

        Ok(row.into())
    }

    /// Create a list together with its first item.
    ///
    /// Both inserts share one transaction, so a failed item insert leaves
    /// no empty list behind.
    pub async fn create_with_item(&self, text: &ItemText) -> Result<(TodoList, Item), DbError> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let list: ListRow =
            sqlx::query_as("INSERT INTO list (created_at) VALUES (?) RETURNING id, created_at")
                .bind(now)
                .fetch_one(&mut *tx)
                .await?;

        let item: ItemRow = sqlx::query_as(
            r#"
            INSERT INTO item (list_id, text, created_at)
            VALUES (?, ?, ?)
            RETURNING id, list_id, text, created_at
            "#,
        )
        .bind(list.id)
        .bind(text.as_str())
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok((list.into(), item.into()))
    }

    /// Get a single list by id.
    pub async fn get(&self, id: ListId) -> Result<TodoList, DbError> {
        sqlx::query_as::<_, ListRow>("SELECT id, created_at FROM list WHERE id = ?")
            .bind(id.get())
            .fetch_optional(self.pool)
            .await?
            .map(TodoList::from)
            .ok_or_else(|| DbError::list_not_found(id))
    }

    pub async fn exists(&self, id: ListId) -> Result<bool, DbError> {
        let (found,): (i64,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM list WHERE id = ?)")
            .bind(id.get())
            .fetch_one(self.pool)
            .await?;
        Ok(found != 0)
    }

    pub async fn count(&self) -> Result<i64, DbError> {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM list")
            .fetch_one(self.pool)
            .await?;
        Ok(n)
    }

    /// All lists, oldest first.
    pub async fn all(&self) -> Result<Vec<TodoList>, DbError> {
        let rows: Vec<ListRow> = sqlx::query_as("SELECT id, created_at FROM list ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(rows.into_iter().map(TodoList::from).collect())
    }
}
