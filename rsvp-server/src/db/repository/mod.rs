//! Repository Module
//!
//! Plain async functions over a `SqlitePool`, one file per table.

pub mod guest;

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepoError::NotFound(err.to_string()),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepoError::Duplicate(db.message().to_string())
            }
            sqlx::Error::Database(db) if db.is_check_violation() => {
                RepoError::Validation(db.message().to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => {
                tracing::error!(error = %msg, "Repository database error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_error_maps_to_app_error() {
        let e: AppError = RepoError::Duplicate("reservation_code".into()).into();
        assert_eq!(e.code, ErrorCode::AlreadyExists);

        let e: AppError = RepoError::Database("disk I/O error".into()).into();
        assert_eq!(e.code, ErrorCode::DatabaseError);
        // internal detail is not leaked to the client
        assert_eq!(e.message, "Database error");

        let e: AppError = RepoError::Validation("bad".into()).into();
        assert_eq!(e.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_row_not_found() {
        let e: RepoError = sqlx::Error::RowNotFound.into();
        assert!(matches!(e, RepoError::NotFound(_)));
    }
}
