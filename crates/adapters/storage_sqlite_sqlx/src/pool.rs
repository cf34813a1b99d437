//! `SQLite` connection pool setup and migration runner.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::StorageError;

/// Configuration for the `SQLite` storage adapter.
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:census.db` or `sqlite::memory:`).
    pub database_url: String,
}

impl Config {
    /// Build a [`Database`] from this configuration.
    ///
    /// Creates the connection pool, creates the database file if missing,
    /// and runs all pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or migrations fail.
    pub async fn build(self) -> Result<Database, StorageError> {
        Database::initialize(&self.database_url).await
    }
}

/// Holds the `SQLite` connection pool and provides access to it.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the database and run migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or migrations fail.
    async fn initialize(database_url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // `sqlite::memory:` opens a fresh, empty database per connection,
        // so the pool is capped at a single one.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_create_pool_and_run_migrations_when_using_memory_db() {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
        };
        let db = config.build().await.unwrap();

        // Verify the table exists by querying sqlite_master
        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' AND name != '_sqlx_migrations' ORDER BY name",
        )
        .fetch_all(db.pool())
        .await
        .unwrap();

        let names: Vec<&str> = tables.iter().map(|row| row.0.as_str()).collect();
        assert!(names.contains(&"people"), "missing people table");
    }

    #[tokio::test]
    async fn should_reject_database_url_with_wrong_scheme() {
        let config = Config {
            database_url: "postgres://localhost/census".to_string(),
        };
        let result = config.build().await;
        assert!(result.is_err());
    }
}
