//! Item repository
//!
//! Items are appended to an existing list and read back in insertion order.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use superlists_core::{Item, ItemId, ItemText, ListId};

use super::DbError;

/// Item record from database
#[derive(Debug, Clone, FromRow)]
pub(crate) struct ItemRow {
    pub id: i64,
    pub list_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            id: ItemId(row.id),
            list_id: ListId(row.list_id),
            text: row.text,
            created_at: row.created_at,
        }
    }
}

/// Item repository
pub struct ItemRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ItemRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Append an item to `list_id`.
    ///
    /// The foreign key on `item.list_id` is the existence check: an unknown
    /// list comes back as `DbError::NotFound`.
    pub async fn create(&self, list_id: ListId, text: &ItemText) -> Result<Item, DbError> {
        let result = sqlx::query_as::<_, ItemRow>(
            r#"
            INSERT INTO item (list_id, text, created_at)
            VALUES (?, ?, ?)
            RETURNING id, list_id, text, created_at
            "#,
        )
        .bind(list_id.get())
        .bind(text.as_str())
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await;

        match result {
            Ok(row) => Ok(row.into()),
            Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() => {
                Err(DbError::list_not_found(list_id))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Items owned by `list_id`, oldest first.
    pub async fn list_for(&self, list_id: ListId) -> Result<Vec<Item>, DbError> {
        let rows: Vec<ItemRow> = sqlx::query_as(
            r#"
            SELECT id, list_id, text, created_at
            FROM item
            WHERE list_id = ?
            ORDER BY id
            "#,
        )
        .bind(list_id.get())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    /// Every item across all lists, oldest first.
    pub async fn all(&self) -> Result<Vec<Item>, DbError> {
        let rows: Vec<ItemRow> =
            sqlx::query_as("SELECT id, list_id, text, created_at FROM item ORDER BY id")
                .fetch_all(self.pool)
                .await?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    pub async fn count(&self) -> Result<i64, DbError> {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM item")
            .fetch_one(self.pool)
            .await?;
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations, ListRepo};

    async fn pool() -> SqlitePool {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        migrations::run(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn saving_and_retrieving_items() {
        let pool = pool().await;
        let list = ListRepo::new(&pool).create().await.unwrap();
        let repo = ItemRepo::new(&pool);

        repo.create(list.id, &ItemText::new("The first (ever) list item"))
            .await
            .unwrap();
        repo.create(list.id, &ItemText::new("Item the second"))
            .await
            .unwrap();

        let saved = repo.all().await.unwrap();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].text, "The first (ever) list item");
        assert_eq!(saved[1].text, "Item the second");
        assert!(saved.iter().all(|item| item.belongs_to(&list)));
    }

    #[tokio::test]
    async fn list_for_excludes_other_lists() {
        let pool = pool().await;
        let lists = ListRepo::new(&pool);
        let repo = ItemRepo::new(&pool);
        let a = lists.create().await.unwrap();
        let b = lists.create().await.unwrap();

        repo.create(a.id, &ItemText::new("milk")).await.unwrap();
        repo.create(b.id, &ItemText::new("bread")).await.unwrap();
        repo.create(a.id, &ItemText::new("eggs")).await.unwrap();

        let texts: Vec<String> = repo
            .list_for(a.id)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.text)
            .collect();
        assert_eq!(texts, vec!["milk", "eggs"]);

        let texts: Vec<String> = repo
            .list_for(b.id)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.text)
            .collect();
        assert_eq!(texts, vec!["bread"]);
    }

    #[tokio::test]
    async fn empty_list_has_no_items() {
        let pool = pool().await;
        let list = ListRepo::new(&pool).create().await.unwrap();

        assert!(ItemRepo::new(&pool).list_for(list.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_text_is_stored() {
        let pool = pool().await;
        let list = ListRepo::new(&pool).create().await.unwrap();

        let item = ItemRepo::new(&pool)
            .create(list.id, &ItemText::new(""))
            .await
            .unwrap();
        assert_eq!(item.text, "");
    }

    #[tokio::test]
    async fn unknown_list_is_not_found() {
        let pool = pool().await;
        let err = ItemRepo::new(&pool)
            .create(ListId(12), &ItemText::new("orphan"))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::NotFound { resource: "list", .. }));
        assert_eq!(ItemRepo::new(&pool).count().await.unwrap(), 0);
    }
}
