//! HTTP chat backend
//!
//! Client for a remote chat service speaking the REST contract:
//! `POST /chat/` for messages, `DELETE /chat/session/{id}` to drop a
//! session, `GET /chat/stats` for session counts.

use reqwest::Client as HttpClient;
use tracing::debug;

use crate::backend::ChatBackend;
use crate::error::{Error, Result};
use crate::types::{ChatReply, ChatRequest, SessionStats};

/// Chat backend that forwards messages to a remote service
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: HttpClient,
    base_url: String,
}

impl HttpBackend {
    /// Create a backend for the service at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client: HttpClient::new(), base_url }
    }

    /// Base URL this backend talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(Error::Status { status: status.as_u16(), message })
    }
}

#[async_trait::async_trait]
impl ChatBackend for HttpBackend {
    async fn send(&self, request: ChatRequest) -> Result<ChatReply> {
        let url = self.endpoint("/chat/");
        debug!(url = %url, "sending chat message");

        let response = self.client.post(&url).json(&request).send().await?;
        let response = Self::check_status(response).await?;

        Ok(response.json::<ChatReply>().await?)
    }

    async fn clear_session(&self, session_id: &str) -> Result<()> {
        let url = self.endpoint(&format!("/chat/session/{}", session_id));
        debug!(url = %url, "deleting chat session");

        let response = self.client.delete(&url).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn active_sessions(&self) -> Result<usize> {
        let url = self.endpoint("/chat/stats");

        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;

        let stats = response.json::<SessionStats>().await?;
        Ok(stats.active_sessions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalized() {
        let backend = HttpBackend::new("http://localhost:8000/");
        assert_eq!(backend.base_url(), "http://localhost:8000");
        assert_eq!(backend.endpoint("/chat/"), "http://localhost:8000/chat/");
    }

    #[test]
    fn test_session_endpoint() {
        let backend = HttpBackend::new("http://chat.example.com");
        assert_eq!(
            backend.endpoint("/chat/session/session_abc"),
            "http://chat.example.com/chat/session/session_abc"
        );
    }

    #[tokio::test]
    async fn test_send_to_unreachable_host_is_http_error() {
        let backend = HttpBackend::new("http://127.0.0.1:1");
        let result = backend.send(ChatRequest::new("hello")).await;
        assert!(matches!(result, Err(Error::Http(_))));
    }
}
