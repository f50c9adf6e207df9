//! In-process chat backend
//!
//! Runs the tool agent directly against the in-memory session store. This
//! is the default mode; no network, no credentials.

use chrono::Utc;

use brewchat_agent::{MemoryStore, ToolAgent};

use crate::backend::ChatBackend;
use crate::error::Result;
use crate::types::{ChatReply, ChatRequest};

/// Chat backend that processes messages in-process
#[derive(Debug, Clone)]
pub struct LocalBackend {
    store: MemoryStore,
    agent: ToolAgent,
}

impl LocalBackend {
    pub fn new(store: MemoryStore, agent: ToolAgent) -> Self {
        Self { store, agent }
    }

    /// The session store backing this instance
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }
}

#[async_trait::async_trait]
impl ChatBackend for LocalBackend {
    async fn send(&self, request: ChatRequest) -> Result<ChatReply> {
        let session_id = self.store.get_or_create(request.session_id.as_deref());

        let response = self.agent.process_message(&session_id, &request.message).await;
        self.store.save_conversation(&session_id, &request.message, &response);

        Ok(ChatReply { response, session_id, timestamp: Utc::now() })
    }

    async fn clear_session(&self, session_id: &str) -> Result<()> {
        self.store.clear_session(session_id);
        Ok(())
    }

    async fn active_sessions(&self) -> Result<usize> {
        Ok(self.store.active_sessions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewchat_agent::MockLlm;
    use brewchat_store::{OutletStore, seed};
    use brewchat_tools::{
        CalculatorTool, OutletSearchTool, ProductSearchTool, ProductVectorStore, ToolRegistry, sample_products,
    };
    use std::sync::Arc;

    fn backend() -> (tempfile::TempDir, LocalBackend) {
        let dir = tempfile::tempdir().unwrap();
        let outlet_store = OutletStore::new(dir.path().join("outlets.db")).unwrap();
        seed::ingest(&outlet_store).unwrap();

        let tools = ToolRegistry::new();
        tools.register(CalculatorTool).unwrap();
        tools
            .register(ProductSearchTool::new(ProductVectorStore::from_products(sample_products())))
            .unwrap();
        tools.register(OutletSearchTool::new(outlet_store)).unwrap();

        let store = MemoryStore::new();
        let agent = ToolAgent::new(tools, Arc::new(MockLlm::new()), store.clone());
        (dir, LocalBackend::new(store, agent))
    }

    #[tokio::test]
    async fn test_send_creates_session() {
        let (_dir, backend) = backend();

        let reply = backend.send(ChatRequest::new("hello")).await.unwrap();
        assert!(reply.session_id.starts_with("session_"));
        assert!(!reply.response.is_empty());
        assert_eq!(backend.active_sessions().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_send_keeps_session_continuity() {
        let (_dir, backend) = backend();

        let first = backend.send(ChatRequest::new("Hi, my name is Sarah")).await.unwrap();
        let second = backend
            .send(ChatRequest::new("What is my name?").with_session(&first.session_id))
            .await
            .unwrap();

        assert_eq!(first.session_id, second.session_id);
        assert!(second.response.contains("Sarah"));
    }

    #[tokio::test]
    async fn test_send_routes_to_tools() {
        let (_dir, backend) = backend();

        let reply = backend.send(ChatRequest::new("Calculate 5 + 3")).await.unwrap();
        assert!(reply.response.contains('8'));
    }

    #[tokio::test]
    async fn test_clear_session() {
        let (_dir, backend) = backend();

        let first = backend.send(ChatRequest::new("Hi, my name is Sarah")).await.unwrap();
        backend.clear_session(&first.session_id).await.unwrap();

        let recall = backend
            .send(ChatRequest::new("What is my name?").with_session(&first.session_id))
            .await
            .unwrap();
        assert!(recall.response.contains("don't recall"));
    }
}
