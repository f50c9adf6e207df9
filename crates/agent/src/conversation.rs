//! Plain conversation agent: memory in, LLM reply out

use std::sync::Arc;

use crate::memory::MemoryStore;
use crate::mock_llm::Llm;

/// Conversation agent with session memory
#[derive(Debug, Clone)]
pub struct ConversationAgent {
    llm: Arc<dyn Llm>,
    store: MemoryStore,
}

impl ConversationAgent {
    pub fn new(llm: Arc<dyn Llm>, store: MemoryStore) -> Self {
        Self { llm, store }
    }

    /// Produce a reply for a message within a session
    pub async fn process_message(&self, session_id: &str, message: &str) -> String {
        let history = self.store.transcript(session_id);
        self.llm.complete(&history, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_llm::MockLlm;

    #[tokio::test]
    async fn test_reply_uses_session_history() {
        let store = MemoryStore::new();
        let agent = ConversationAgent::new(Arc::new(MockLlm::new()), store.clone());

        let session_id = store.get_or_create(None);
        let intro = agent.process_message(&session_id, "Hi, my name is Alex").await;
        store.save_conversation(&session_id, "Hi, my name is Alex", &intro);

        let recall = agent.process_message(&session_id, "What is my name?").await;
        assert!(recall.contains("Alex"));
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = MemoryStore::new();
        let agent = ConversationAgent::new(Arc::new(MockLlm::new()), store.clone());

        let first = store.get_or_create(None);
        store.save_conversation(&first, "my name is Sarah", "Hello Sarah!");

        let second = store.get_or_create(None);
        let recall = agent.process_message(&second, "What is my name?").await;
        assert!(recall.contains("don't recall"));
    }
}
