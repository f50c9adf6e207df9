//! Scripted demo conversation
//!
//! Walks the assistant through outlet search, product search, calculation
//! and name memory with preset questions.

use anyhow::Result;
use owo_colors::OwoColorize;
use std::sync::Arc;

use brewchat_commands::detect_tool;
use brewchat_transport::{ChatBackend, ChatRequest, LocalBackend};

/// Longest reply printed before truncation kicks in
const MAX_REPLY_CHARS: usize = 300;

const QUESTIONS: &[&str] = &[
    "Where are the outlets in Petaling Jaya?",
    "Which outlets have drive-through?",
    "What tumblers do you have?",
    "Calculate 79 + 45",
    "Hi, my name is Alex",
    "What is my name?",
];

/// Run the preset questions against the local backend
pub async fn run_demo(backend: Arc<LocalBackend>) -> Result<()> {
    println!("\n{}", "=".repeat(60));
    println!("{}", "Brew & Co Quick Demo (mock LLM)".cyan().bold());
    println!("{}\n", "=".repeat(60));

    let mut session_id: Option<String> = None;

    for (idx, question) in QUESTIONS.iter().enumerate() {
        println!("\n{}. {} {}", idx + 1, "You:".green().bold(), question);

        let mut request = ChatRequest::new(*question);
        if let Some(id) = session_id.as_deref() {
            request = request.with_session(id);
        }

        let reply = backend
            .send(request)
            .await
            .map_err(|e| anyhow::anyhow!("demo exchange failed: {}", e))?;
        session_id = Some(reply.session_id.clone());

        let label = match detect_tool(&reply.response).badge() {
            Some(badge) => format!("{} [{} {}]", "Bot:".blue().bold(), badge.icon, badge.label),
            None => format!("{}", "Bot:".blue().bold()),
        };
        println!("{} {}", label, truncate_reply(&reply.response));
        println!("{}", "-".repeat(60));
    }

    println!("\n{} Demo complete!", "OK:".green().bold());
    println!("Run {} for an interactive session.\n", "brewchat chat".bold());
    Ok(())
}

/// Shorten long replies for readability
fn truncate_reply(reply: &str) -> String {
    if reply.chars().count() <= MAX_REPLY_CHARS {
        return reply.to_string();
    }

    let truncated: String = reply.chars().take(MAX_REPLY_CHARS).collect();
    format!(
        "{}...\n   [truncated, full response is {} chars]",
        truncated,
        reply.chars().count()
    )
}
