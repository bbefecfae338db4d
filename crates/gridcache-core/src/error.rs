//! Error types for gridcache-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridcache-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Text is not a valid cell reference or range
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// A strict write targeted a cell no cached grid covers
    #[error("No cached grid covers {0}")]
    UncoveredWrite(String),
}
