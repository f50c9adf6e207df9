//! Error types for the outlet database

use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the outlet store
#[derive(Error, Debug)]
pub enum Error {
    /// SQLite database error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Outlet not found
    #[error("outlet not found: {0}")]
    NotFound(String),

    /// Database corruption or schema mismatch
    #[error("database error: {0}")]
    Database(String),
}

impl Error {
    /// Create a database error with a message
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }
}

impl From<Error> for brewchat_core::Error {
    fn from(err: Error) -> Self {
        brewchat_core::Error::Other(err.to_string())
    }
}
