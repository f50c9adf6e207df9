use crate::error::Result;
use crate::types::{ChatReply, ChatRequest};

/// A chat backend the client can talk to
///
/// One implementation runs the agent in-process; the other speaks to a
/// remote chat service over HTTP. The client renders every error inline as
/// a failed exchange, so implementations surface failures as [crate::Error]
/// rather than panicking.
#[async_trait::async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send a message and receive the reply for its session
    async fn send(&self, request: ChatRequest) -> Result<ChatReply>;

    /// Clear the conversation memory of a session
    async fn clear_session(&self, session_id: &str) -> Result<()>;

    /// Number of active sessions on the backend
    async fn active_sessions(&self) -> Result<usize>;
}
