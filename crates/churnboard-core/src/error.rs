//! Error types for Churnboard.

use thiserror::Error;

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Churnboard error types.
#[derive(Debug, Error)]
pub enum Error {
    /// Signup attempted with a username that is already taken
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    /// Account storage exists but cannot be parsed
    #[error("Account storage is unreadable: {0}")]
    StorageRead(String),

    /// Account storage could not be written
    #[error("Account storage could not be written: {0}")]
    StorageWrite(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}
