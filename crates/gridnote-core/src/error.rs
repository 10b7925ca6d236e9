//! Error types for gridnote-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridnote-core
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid cell reference format
    #[error("Invalid cell reference: {0}")]
    InvalidReference(String),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u16, u16),

    /// Invalid snapshot address key
    #[error("Invalid address key: {0}")]
    InvalidKey(String),
}
