use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Startup and lifecycle failures. Request-level errors use `AppError`.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Mail transport error: {0}")]
    Mail(#[from] crate::notify::NotifyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<AppError> for ServerError {
    fn from(err: AppError) -> Self {
        match err.code {
            ErrorCode::DatabaseError => ServerError::Database(err.message),
            code => ServerError::Internal(anyhow::Error::new(err).context(format!("error code {code}"))),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
