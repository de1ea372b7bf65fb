//! Error types for the board / 错误类型

use thiserror::Error;

/// Errors surfaced by search, pagination and article lookups
#[derive(Debug, Error)]
pub enum BoardError {
    /// Caller violated a precondition (negative page index, zero size, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A single-entity lookup found nothing
    #[error("Not found: {0}")]
    NotFound(String),

    /// The content store could not complete the query
    #[error("Store failure: {0}")]
    Store(#[from] sqlx::Error),
}

impl BoardError {
    pub fn invalid(message: impl Into<String>) -> Self {
        BoardError::InvalidArgument(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        BoardError::NotFound(message.into())
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
