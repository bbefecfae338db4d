//! Clipboard error types

use thiserror::Error;

/// Result type for clipboard operations
pub type ClipboardResult<T> = std::result::Result<T, ClipboardError>;

/// Errors that can occur while converting clipboard text
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input text is not UTF-8
    #[error("Clipboard text is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Pasted text reaches past the last addressable row or column
    #[error("Token at row {row}, column {column} lands outside the grid")]
    OutOfBounds { row: usize, column: usize },

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] gridcache_core::Error),
}
