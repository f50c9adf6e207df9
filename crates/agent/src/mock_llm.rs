//! Deterministic mock LLM
//!
//! Simulates conversational replies without any API calls, so development
//! and tests run without credentials. Pattern checks run against the
//! current message; name recall additionally scans the session transcript.

use regex::Regex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A conversational language model
pub trait Llm: Send + Sync + std::fmt::Debug {
    /// Produce a reply given the session transcript and the current message
    fn complete(&self, history: &str, input: &str) -> String;
}

/// Canned-response model for development without API credits
#[derive(Debug)]
pub struct MockLlm {
    responses: Vec<String>,
    index: AtomicUsize,
}

impl Default for MockLlm {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLlm {
    pub fn new() -> Self {
        let responses = vec![
            "Hello! I'm a helpful AI assistant for Brew & Co. How can I help you today?".to_string(),
            "I'd be happy to help you with that!".to_string(),
            "That's a great question. Let me assist you with information about Brew & Co.".to_string(),
            "I can help you find Brew & Co outlets, learn about our drinkware, or answer any \
             questions you have."
                .to_string(),
        ];

        Self { responses, index: AtomicUsize::new(0) }
    }

    fn extract_name(text: &str) -> Option<String> {
        let pattern = Regex::new(r"(?i)\b(?:my name is|i'?m|i am)\s+(\w+)").expect("static pattern");
        let captures = pattern.captures(text)?;
        let raw = captures.get(1)?.as_str();

        let mut chars = raw.chars();
        let first = chars.next()?;
        Some(first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase())
    }

    fn next_default_response(&self) -> String {
        let index = self.index.fetch_add(1, Ordering::SeqCst);
        self.responses[index % self.responses.len()].clone()
    }
}

impl Llm for MockLlm {
    fn complete(&self, history: &str, input: &str) -> String {
        let current = input.to_lowercase();

        // Memory check: the current message asks about a name mentioned earlier
        if current.contains("what") && current.contains("name") {
            let haystack = format!("{}\n{}", history, input);
            return match Self::extract_name(&haystack) {
                Some(name) => format!("Your name is {}! I remember you mentioned that.", name),
                None => "I don't recall you mentioning your name. What is it?".to_string(),
            };
        }

        if ["product", "drinkware", "tumbler"].iter().any(|kw| current.contains(kw)) {
            return "Brew & Co offers a range of high-quality drinkware including insulated \
                    tumblers, bottles, and mugs. They're perfect for keeping your drinks hot \
                    or cold!"
                .to_string();
        }

        if ["outlet", "location", "store"].iter().any(|kw| current.contains(kw)) {
            return "Brew & Co has outlets across Malaysia, particularly in Kuala Lumpur and \
                    Selangor. I can help you find specific locations!"
                .to_string();
        }

        let looks_like_math = ["calculate", "+", "-", "*", "/"].iter().any(|kw| current.contains(kw))
            || (current.contains("what") && current.contains("is") && current.chars().any(|c| c.is_ascii_digit()));
        if looks_like_math {
            return "I can help you with calculations. What would you like me to calculate?".to_string();
        }

        if let Some(name) = Self::extract_name(input) {
            return format!(
                "Hello {}! Nice to meet you. I'll remember your name. How can I help you today?",
                name
            );
        }

        if ["hello", "hi", "hey"].iter().any(|greeting| current.contains(greeting)) {
            return "Hello! I'm a helpful AI assistant for Brew & Co. How can I help you today?".to_string();
        }

        self.next_default_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_introduction() {
        let llm = MockLlm::new();
        let reply = llm.complete("", "Hi, my name is Sarah");
        assert!(reply.contains("Hello Sarah!"));
    }

    #[test]
    fn test_name_recall_from_history() {
        let llm = MockLlm::new();
        let history = "Human: Hi, my name is Sarah\nAI: Hello Sarah! Nice to meet you.";
        let reply = llm.complete(history, "What's my name?");
        assert!(reply.contains("Your name is Sarah"));
    }

    #[test]
    fn test_name_recall_without_introduction() {
        let llm = MockLlm::new();
        let reply = llm.complete("", "What's my name?");
        assert!(reply.contains("don't recall"));
    }

    #[test]
    fn test_product_reply() {
        let llm = MockLlm::new();
        let reply = llm.complete("", "Tell me about your drinkware");
        assert!(reply.contains("tumblers"));
    }

    #[test]
    fn test_outlet_reply() {
        let llm = MockLlm::new();
        let reply = llm.complete("", "Where is your nearest store?");
        assert!(reply.contains("outlets across Malaysia"));
    }

    #[test]
    fn test_calculation_prompt() {
        let llm = MockLlm::new();
        let reply = llm.complete("", "Can you calculate things?");
        assert!(reply.contains("calculations"));
    }

    #[test]
    fn test_greeting() {
        let llm = MockLlm::new();
        let reply = llm.complete("", "hey");
        assert!(reply.contains("Hello!"));
    }

    #[test]
    fn test_default_responses_cycle() {
        let llm = MockLlm::new();
        let first = llm.complete("", "qqq");
        let second = llm.complete("", "qqq");
        assert_ne!(first, second);
    }

    #[test]
    fn test_extract_name_capitalizes() {
        assert_eq!(MockLlm::extract_name("i'm ALEX"), Some("Alex".to_string()));
        assert_eq!(MockLlm::extract_name("I am bob"), Some("Bob".to_string()));
        assert_eq!(MockLlm::extract_name("no introduction here"), None);
    }
}
