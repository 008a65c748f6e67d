//! Storage error types

use thiserror::Error;

/// Result type alias for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Storage-specific error types
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Lock error: {0}")]
    Lock(String),

    #[error("Id space exhausted for {0}")]
    IdExhausted(&'static str),
}

