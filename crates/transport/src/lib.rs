//! Chat transport for the terminal client
//!
//! Defines the [ChatBackend] seam plus two implementations: an in-process
//! backend running the tool agent directly, and an HTTP client for a
//! remote chat service.

mod backend;
mod error;
mod http;
mod local;
mod types;

pub use backend::ChatBackend;
pub use error::{Error, Result};
pub use http::HttpBackend;
pub use local::LocalBackend;
pub use types::{ChatReply, ChatRequest, SessionStats};
