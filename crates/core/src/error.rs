use thiserror::Error;

/// Result type alias for brewchat-core
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for the brewchat chatbot
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error for file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Session-related errors
    #[error("session error: {0}")]
    Session(#[from] SessionError),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Tool execution errors
    #[error("tool error: {0}")]
    Tool(String),

    /// Chat backend errors
    #[error("backend error: {0}")]
    Backend(String),

    /// Parse/serialization errors
    #[error("parse error: {0}")]
    Parse(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Session-specific errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// Session not found
    #[error("session not found: {0}")]
    NotFound(String),

    /// Invalid session ID
    #[error("invalid session ID: {0}")]
    InvalidId(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}
