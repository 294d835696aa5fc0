//! Versioned schema migrations
//!
//! Forward-only steps, each applied in its own transaction and recorded in
//! `schema_migrations`. Already-recorded versions are skipped, so `run` is
//! safe to call on every startup.

use sqlx::SqlitePool;

/// A single schema step
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub version: i64,
    pub name: &'static str,
    pub statements: &'static [&'static str],
}

/// Placeholder owner for items that predate lists.
pub const BACKFILL_LIST_ID: i64 = 1;

/// All migrations, in application order
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_item",
        statements: &["CREATE TABLE item (id INTEGER PRIMARY KEY AUTOINCREMENT)"],
    },
    Migration {
        version: 2,
        name: "item_text",
        statements: &["ALTER TABLE item ADD COLUMN text TEXT NOT NULL DEFAULT ''"],
    },
    Migration {
        version: 3,
        name: "create_list",
        statements: &["CREATE TABLE list (id INTEGER PRIMARY KEY AUTOINCREMENT)"],
    },
    // SQLite refuses to add a NOT NULL column with a REFERENCES clause in
    // place, so item is rebuilt. Pre-existing rows are assigned to list 1,
    // which is created first when there is anything to backfill.
    Migration {
        version: 4,
        name: "item_list_fk",
        statements: &[
            "INSERT OR IGNORE INTO list (id) SELECT 1 WHERE EXISTS (SELECT 1 FROM item)",
            r#"
            CREATE TABLE item_new (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                text TEXT NOT NULL DEFAULT '',
                list_id INTEGER NOT NULL REFERENCES list(id)
            )
            "#,
            "INSERT INTO item_new (id, text, list_id) SELECT id, text, 1 FROM item",
            "DROP TABLE item",
            "ALTER TABLE item_new RENAME TO item",
        ],
    },
    Migration {
        version: 5,
        name: "timestamps",
        statements: &[
            "ALTER TABLE list ADD COLUMN created_at TEXT NOT NULL DEFAULT '1970-01-01T00:00:00Z'",
            "ALTER TABLE item ADD COLUMN created_at TEXT NOT NULL DEFAULT '1970-01-01T00:00:00Z'",
            "UPDATE list SET created_at = strftime('%Y-%m-%dT%H:%M:%SZ', 'now')",
            "UPDATE item SET created_at = strftime('%Y-%m-%dT%H:%M:%SZ', 'now')",
            "CREATE INDEX IF NOT EXISTS idx_item_list_id ON item(list_id)",
        ],
    },
];

/// Migration error
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("migration {version} ({name}) failed: {source}")]
    Step {
        version: i64,
        name: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Apply every pending migration. Returns how many were applied.
pub async fn run(pool: &SqlitePool) -> Result<usize, MigrationError> {
    run_to(pool, i64::MAX).await
}

/// Apply pending migrations up to and including `target` version.
pub async fn run_to(pool: &SqlitePool, target: i64) -> Result<usize, MigrationError> {
    ensure_table(pool).await?;
    let done = applied(pool).await?;

    let mut count = 0;
    for migration in MIGRATIONS.iter().filter(|m| m.version <= target) {
        if done.contains(&migration.version) {
            continue;
        }

        apply(pool, migration)
            .await
            .map_err(|source| MigrationError::Step {
                version: migration.version,
                name: migration.name,
                source,
            })?;

        tracing::info!(
            version = migration.version,
            name = migration.name,
            "applied migration"
        );
        count += 1;
    }

    if count == 0 {
        tracing::debug!("schema up to date");
    } else {
        tracing::info!(count, "migrations complete");
    }
    Ok(count)
}

/// Versions already recorded, ascending. Read-only: a database that was
/// never migrated reports nothing applied.
pub async fn applied(pool: &SqlitePool) -> Result<Vec<i64>, MigrationError> {
    let (tracked,): (i64,) = sqlx::query_as(
        "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'schema_migrations')",
    )
    .fetch_one(pool)
    .await?;
    if tracked == 0 {
        return Ok(Vec::new());
    }

    let rows: Vec<(i64,)> = sqlx::query_as("SELECT version FROM schema_migrations ORDER BY version")
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(|(v,)| v).collect())
}

/// Latest known version.
pub fn latest_version() -> i64 {
    MIGRATIONS.last().map(|m| m.version).unwrap_or(0)
}

/// Known migrations missing from `applied`.
pub fn pending(applied: &[i64]) -> Vec<&'static Migration> {
    MIGRATIONS
        .iter()
        .filter(|m| !applied.contains(&m.version))
        .collect()
}

async fn ensure_table(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn apply(pool: &SqlitePool, migration: &Migration) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for statement in migration.statements {
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    sqlx::query("INSERT INTO schema_migrations (version, name) VALUES (?, ?)")
        .bind(migration.version)
        .bind(migration.name)
        .execute(&mut *tx)
        .await?;

    tx.commit().await
}
