//! Error types for the chat transport

use thiserror::Error;

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to a chat backend
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failure (connect, timeout, body)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote service answered with a non-success status
    #[error("chat service returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Backend-side failure
    #[error("backend error: {0}")]
    Backend(String),
}

impl Error {
    /// Create a backend error with a message
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Status { status: 500, message: "internal error".to_string() };
        assert_eq!(err.to_string(), "chat service returned 500: internal error");

        let err = Error::backend("agent unavailable");
        assert_eq!(err.to_string(), "backend error: agent unavailable");
    }
}
