// ABOUTME: Error types for tag operations
// ABOUTME: Wraps storage failures and color generator failures

use quotes_storage::StorageError;
use thiserror::Error;

use crate::color::GeneratorError;

#[derive(Error, Debug)]
pub enum TagError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Color generator error: {0}")]
    Generator(#[from] GeneratorError),
}

impl From<sqlx::Error> for TagError {
    fn from(err: sqlx::Error) -> Self {
        TagError::Storage(StorageError::Sqlx(err))
    }
}

impl TagError {
    /// True when a concurrent writer created the same tag name first.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            TagError::Storage(err) => err.is_unique_violation(),
            TagError::Generator(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, TagError>;
