//! Conversation agents for the retail chatbot
//!
//! Session memory, the deterministic mock LLM, and the dispatch agent that
//! decides when a message should reach a tool instead of the model.

pub mod conversation;
pub mod memory;
pub mod mock_llm;
pub mod tool_agent;

pub use conversation::ConversationAgent;
pub use memory::{ConversationMemory, MemoryStore, SessionInfo, Turn};
pub use mock_llm::{Llm, MockLlm};
pub use tool_agent::ToolAgent;
