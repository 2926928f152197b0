use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Error as SqlxError;
use std::time::Duration;
use tracing::info;

use crate::models::Item;

/// Database connection pool for the items table
pub struct DbItems {
    pool: PgPool,
}

impl DbItems {
    /// Create a new database connection pool
    ///
    /// Connections are established lazily; an unreachable store surfaces as
    /// an error on the first query, not here.
    ///
    /// # Arguments
    /// * `database_url` - PostgreSQL connection string
    ///
    /// # Returns
    /// * `Result<Self, SqlxError>` - Database connection pool or error
    pub fn new(database_url: &str) -> Result<Self, SqlxError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .connect_lazy(database_url)?;

        info!("Database connection pool created");

        Ok(Self { pool })
    }

    /// Ensure the items table exists
    ///
    /// Idempotent; invoked once at process start, never from request handling.
    pub async fn ensure_schema(&self) -> Result<(), SqlxError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                id SERIAL PRIMARY KEY,
                name VARCHAR(200) NOT NULL,
                created_at TIMESTAMPTZ
            );
        "#,
        )
        .execute(&self.pool)
        .await?;

        info!("Schema ensured for table 'items'");
        Ok(())
    }

    /// List all items, most recently created first
    pub async fn list_items(&self) -> Result<Vec<Item>, SqlxError> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, created_at
            FROM items
            ORDER BY id DESC;
        "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Look up a single item by primary key
    ///
    /// # Returns
    /// * `Result<Option<Item>, SqlxError>` - The item if a row matches
    pub async fn get_item(&self, id: i32) -> Result<Option<Item>, SqlxError> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, created_at
            FROM items
            WHERE id = $1;
        "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Insert a new item and return the persisted row
    ///
    /// # Arguments
    /// * `name` - Already-validated item name
    /// * `created_at` - Server-assigned creation time
    pub async fn insert_item(
        &self,
        name: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Item, SqlxError> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items(name, created_at)
            VALUES ($1, $2)
            RETURNING id, name, created_at;
        "#,
        )
        .bind(name)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await?;

        info!("Item created: {}", item.id);
        Ok(item)
    }
}

#[cfg(test)]
impl DbItems {
    /// Wrap an existing pool, for tests that bring their own database
    pub(crate) fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}
