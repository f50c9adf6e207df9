//! In-memory conversation session store
//!
//! Sessions live for the process lifetime only. The store hands out opaque
//! session ids and keeps one buffered conversation per id, plus metadata
//! for the stats surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// One user/bot exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub user: String,
    pub bot: String,
}

/// Buffered conversation history for a single session
#[derive(Debug, Clone, Default)]
pub struct ConversationMemory {
    turns: Vec<Turn>,
}

impl ConversationMemory {
    /// Append one exchange
    pub fn save_context(&mut self, user: impl Into<String>, bot: impl Into<String>) {
        self.turns.push(Turn { user: user.into(), bot: bot.into() });
    }

    /// Render the history as a `Human:` / `AI:` transcript for LLM context
    pub fn transcript(&self) -> String {
        let mut lines = Vec::with_capacity(self.turns.len() * 2);
        for turn in &self.turns {
            lines.push(format!("Human: {}", turn.user));
            lines.push(format!("AI: {}", turn.bot));
        }
        lines.join("\n")
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

/// Metadata about a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub message_count: usize,
}

#[derive(Debug)]
struct SessionEntry {
    memory: ConversationMemory,
    info: SessionInfo,
}

/// Manages conversation memory for multiple sessions
///
/// Backed by a process-local map; clones share the same sessions. In
/// production this would be Redis or a database behind the same handle.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    sessions: Arc<RwLock<HashMap<String, SessionEntry>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an existing session or create a new one
    ///
    /// Returns the session id, freshly generated when none was supplied.
    /// Supplying an unknown id creates a session under that id.
    pub fn get_or_create(&self, session_id: Option<&str>) -> String {
        let session_id = match session_id {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => Self::generate_session_id(),
        };

        let mut sessions = self.sessions.write().unwrap();
        sessions.entry(session_id.clone()).or_insert_with(|| SessionEntry {
            memory: ConversationMemory::default(),
            info: SessionInfo { created_at: Utc::now(), updated_at: None, message_count: 0 },
        });

        session_id
    }

    /// Save a conversation turn; unknown sessions are ignored
    pub fn save_conversation(&self, session_id: &str, user_message: &str, ai_response: &str) {
        let mut sessions = self.sessions.write().unwrap();
        if let Some(entry) = sessions.get_mut(session_id) {
            entry.memory.save_context(user_message, ai_response);
            entry.info.message_count += 1;
            entry.info.updated_at = Some(Utc::now());
        }
    }

    /// The `Human:` / `AI:` transcript for a session (empty when unknown)
    pub fn transcript(&self, session_id: &str) -> String {
        let sessions = self.sessions.read().unwrap();
        sessions.get(session_id).map(|entry| entry.memory.transcript()).unwrap_or_default()
    }

    /// Conversation turns for a session
    pub fn history(&self, session_id: &str) -> Vec<Turn> {
        let sessions = self.sessions.read().unwrap();
        sessions.get(session_id).map(|entry| entry.memory.turns().to_vec()).unwrap_or_default()
    }

    /// Clear a session's memory, keeping the session alive
    pub fn clear_session(&self, session_id: &str) {
        let mut sessions = self.sessions.write().unwrap();
        if let Some(entry) = sessions.get_mut(session_id) {
            entry.memory.clear();
            entry.info.message_count = 0;
        }
    }

    /// Delete a session entirely
    pub fn delete_session(&self, session_id: &str) {
        let mut sessions = self.sessions.write().unwrap();
        sessions.remove(session_id);
    }

    /// Metadata about a session
    pub fn session_info(&self, session_id: &str) -> Option<SessionInfo> {
        let sessions = self.sessions.read().unwrap();
        sessions.get(session_id).map(|entry| entry.info.clone())
    }

    /// Count of active sessions
    pub fn active_sessions(&self) -> usize {
        let sessions = self.sessions.read().unwrap();
        sessions.len()
    }

    fn generate_session_id() -> String {
        let hex = Uuid::new_v4().simple().to_string();
        format!("session_{}", &hex[..16])
    }
}
