//! Storage-specific error type wrapping sqlx errors.

use census_domain::error::CensusError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for CensusError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
