//! Keyword-dispatch agent with tool calling
//!
//! Routes each message to the product search, outlet search, or calculator
//! tool based on keywords and extracted expressions; everything else falls
//! through to the conversation agent. A production setup would let the
//! model pick tools; the mock path uses this deterministic dispatcher.

use regex::Regex;
use std::sync::Arc;
use tracing::{debug, warn};

use brewchat_tools::ToolRegistry;

use crate::conversation::ConversationAgent;
use crate::memory::MemoryStore;
use crate::mock_llm::Llm;

/// Keywords that send a message to the product search tool
const PRODUCT_KEYWORDS: &[&str] = &[
    "product",
    "tumbler",
    "bottle",
    "cup",
    "mug",
    "drinkware",
    "buy",
    "purchase",
    "price",
    "available",
    "stock",
];

/// Keywords that send a message to the outlet search tool
const OUTLET_KEYWORDS: &[&str] = &[
    "outlet",
    "outlets",
    "location",
    "branch",
    "drive-through",
    "drive thru",
    "wifi",
    "operating hours",
    "opening hours",
    "address",
];

/// Keywords that mark a message as a calculation request
const CALC_KEYWORDS: &[&str] = &["calculate", "compute", "what is", "solve"];

const APOLOGY: &str =
    "I apologize, but I encountered an error processing your request. Please try again.";

/// Agent that decides when to use tools versus responding directly
#[derive(Debug, Clone)]
pub struct ToolAgent {
    tools: ToolRegistry,
    conversation: ConversationAgent,
}

impl ToolAgent {
    /// Create a tool agent over a registry holding the calculator,
    /// product_search and outlet_search tools
    pub fn new(tools: ToolRegistry, llm: Arc<dyn Llm>, store: MemoryStore) -> Self {
        let conversation = ConversationAgent::new(llm, store);
        Self { tools, conversation }
    }

    /// Process a message, dispatching to a tool when one applies
    pub async fn process_message(&self, session_id: &str, message: &str) -> String {
        let lower = message.to_lowercase();

        if PRODUCT_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            debug!(session_id, "dispatching to product search");
            return self.run_tool("product_search", message).await;
        }

        if OUTLET_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            debug!(session_id, "dispatching to outlet search");
            return self.run_tool("outlet_search", message).await;
        }

        let has_calc_keyword = CALC_KEYWORDS.iter().any(|kw| lower.contains(kw));
        let expression = extract_math_expression(message);

        if let Some(expression) = expression
            && (has_calc_keyword || !expression.is_empty())
        {
            debug!(session_id, expression = %expression, "dispatching to calculator");
            return self.run_tool("calculator", &expression).await;
        }

        self.conversation.process_message(session_id, message).await
    }

    async fn run_tool(&self, tool_name: &str, query: &str) -> String {
        match self.tools.run(tool_name, query) {
            Ok(reply) => reply,
            Err(e) => {
                warn!("tool dispatch failed: {}", e);
                APOLOGY.to_string()
            }
        }
    }
}

/// Pull the longest arithmetic expression out of free text
///
/// Candidates are runs of digits, operators, dots and parentheses; a
/// candidate only counts when it contains both a digit and an operator.
/// Spaces are stripped so "79 + 45" reaches the calculator as "79+45".
fn extract_math_expression(message: &str) -> Option<String> {
    let pattern = Regex::new(r"[0-9\s+\-*/().]+").expect("static pattern");
    let operator = Regex::new(r"[+\-*/]").expect("static pattern");

    let mut longest = "";
    for candidate in pattern.find_iter(message) {
        let cleaned = candidate.as_str().trim();
        if cleaned.chars().any(|c| c.is_ascii_digit())
            && operator.is_match(cleaned)
            && cleaned.len() > longest.len()
        {
            longest = cleaned;
        }
    }

    if longest.is_empty() {
        return None;
    }

    Some(longest.replace(' ', ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_llm::MockLlm;
    use brewchat_store::{OutletStore, seed};
    use brewchat_tools::{
        CalculatorTool, OutletSearchTool, ProductSearchTool, ProductVectorStore, sample_products,
    };

    fn agent() -> (tempfile::TempDir, MemoryStore, ToolAgent) {
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
        (dir, store, agent)
    }

    #[tokio::test]
    async fn test_product_query_routed_to_product_search() {
        let (_dir, store, agent) = agent();
        let session_id = store.get_or_create(None);

        let reply = agent.process_message(&session_id, "What tumblers do you have?").await;
        assert!(reply.contains("Price: RM"));
    }

    #[tokio::test]
    async fn test_outlet_query_routed_to_outlet_search() {
        let (_dir, store, agent) = agent();
        let session_id = store.get_or_create(None);

        let reply = agent.process_message(&session_id, "Where are the outlets in Petaling Jaya?").await;
        assert!(reply.contains("Address:"));
    }

    #[tokio::test]
    async fn test_calculation_routed_to_calculator() {
        let (_dir, store, agent) = agent();
        let session_id = store.get_or_create(None);

        let reply = agent.process_message(&session_id, "Calculate 79 + 45").await;
        assert!(reply.contains("124"));
    }

    #[tokio::test]
    async fn test_expression_without_keyword_still_calculates() {
        let (_dir, store, agent) = agent();
        let session_id = store.get_or_create(None);

        let reply = agent.process_message(&session_id, "(5+3)*2 please").await;
        assert!(reply.contains("16"));
    }

    #[tokio::test]
    async fn test_plain_chat_falls_through_to_conversation() {
        let (_dir, store, agent) = agent();
        let session_id = store.get_or_create(None);

        let reply = agent.process_message(&session_id, "Hi, my name is Sarah").await;
        assert!(reply.contains("Sarah"));
    }

    #[tokio::test]
    async fn test_name_memory_across_turns() {
        let (_dir, store, agent) = agent();
        let session_id = store.get_or_create(None);

        let intro = agent.process_message(&session_id, "Hi, my name is Sarah").await;
        store.save_conversation(&session_id, "Hi, my name is Sarah", &intro);

        let recall = agent.process_message(&session_id, "What is my name?").await;
        assert!(recall.contains("Sarah"));
    }

    #[tokio::test]
    async fn test_missing_tool_yields_apology() {
        let store = MemoryStore::new();
        let agent = ToolAgent::new(ToolRegistry::new(), Arc::new(MockLlm::new()), store.clone());
        let session_id = store.get_or_create(None);

        let reply = agent.process_message(&session_id, "Calculate 1+1").await;
        assert_eq!(reply, APOLOGY);
    }

    #[test]
    fn test_extract_math_expression() {
        assert_eq!(extract_math_expression("Calculate 79 + 45"), Some("79+45".to_string()));
        assert_eq!(extract_math_expression("what is (5+3)*2"), Some("(5+3)*2".to_string()));
        assert_eq!(extract_math_expression("no math here"), None);
        assert_eq!(extract_math_expression("version 2"), None);
    }

    #[test]
    fn test_extract_math_expression_picks_longest() {
        let extracted = extract_math_expression("compare 1+1 with 100*200+300");
        assert_eq!(extracted, Some("100*200+300".to_string()));
    }
}
