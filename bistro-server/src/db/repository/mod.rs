//! Repository Module
//!
//! One module of free functions per table. Every write re-reads the affected
//! row inside the same transaction, so a write is only committed when its
//! read-back succeeds.

// Staff
pub mod employee;
pub mod timesheet;

// Menus
pub mod menu;
pub mod menu_item;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("In use: {0}")]
    InUse(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepoError::NotFound(err.to_string()),
            other => RepoError::Database(other.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Read-back after a write came back empty
fn vanished(entity: &str, id: i64) -> RepoError {
    RepoError::Database(format!("{entity} {id} missing after write"))
}
