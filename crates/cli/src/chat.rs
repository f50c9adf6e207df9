//! Interactive chat loop
//!
//! Reads lines from stdin, runs slash commands through the command module,
//! and annotates bot replies with the detected tool badge.

use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::{BufRead, Write};
use std::sync::Arc;

use brewchat_commands::{CommandDispatch, detect_tool, dispatch, is_command, parse_command, suggestions};
use brewchat_transport::{ChatBackend, ChatRequest};

/// Run the interactive loop until the user quits
pub async fn run_chat(backend: Arc<dyn ChatBackend>, session: Option<String>) -> Result<()> {
    let mut session_id = session;

    print_banner();

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", "You:".green().bold());
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let input = line?;
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if ["quit", "exit", "q"].contains(&input.to_lowercase().as_str()) {
            println!("\n{}", "Goodbye!".cyan());
            break;
        }

        if is_command(input) {
            match parse_command(input) {
                Some(parsed) => match dispatch(&parsed) {
                    CommandDispatch::Forward(message) => {
                        send_and_print(backend.as_ref(), &mut session_id, &message).await;
                    }
                    CommandDispatch::Local(text) => println!("\n{}\n", text),
                    CommandDispatch::ClearSession => {
                        if let Some(id) = &session_id {
                            if let Err(e) = backend.clear_session(id).await {
                                println!("\n{} {}\n", "Error:".red().bold(), e);
                                continue;
                            }
                        }
                        println!("\n{}\n", "Conversation cleared.".cyan());
                    }
                    CommandDispatch::Unknown => {
                        println!("\n{} /{}", "Unknown command:".yellow().bold(), parsed.command);
                        print_suggestions(&format!("/{}", parsed.command));
                    }
                },
                // a lone "/" opens the command menu
                None => print_suggestions("/"),
            }
            continue;
        }

        send_and_print(backend.as_ref(), &mut session_id, input).await;
    }

    Ok(())
}

fn print_banner() {
    println!("\n{}", "=".repeat(60));
    println!("{}", "Brew & Co Assistant".cyan().bold());
    println!("{}", "=".repeat(60));
    println!("\nTry asking about:");
    println!("  Outlets:  'Where are outlets in KL?'");
    println!("  Products: 'What tumblers do you have?'");
    println!("  Math:     'Calculate 25 * 4'");
    println!("  Chat:     'Hi, my name is Sarah'");
    println!("\nSlash commands work too; type / to list them.");
    println!("Type 'quit' or 'exit' to stop.\n");
    println!("{}\n", "=".repeat(60));
}

fn print_suggestions(input: &str) {
    let matches = suggestions(input);

    if matches.is_empty() {
        println!("Type {} to list available commands.\n", "/help".bold());
        return;
    }

    println!();
    for suggestion in matches {
        println!("  {} - {}", suggestion.display.bold(), suggestion.description);
    }
    println!();
}

async fn send_and_print(backend: &dyn ChatBackend, session_id: &mut Option<String>, message: &str) {
    let mut request = ChatRequest::new(message);
    if let Some(id) = session_id.as_deref() {
        request = request.with_session(id);
    }

    match backend.send(request).await {
        Ok(reply) => {
            *session_id = Some(reply.session_id.clone());

            let badge = detect_tool(&reply.response).badge();
            match badge {
                Some(badge) => println!(
                    "\n{} [{} {}] {}\n",
                    "Bot:".blue().bold(),
                    badge.icon,
                    badge.label.dimmed(),
                    reply.response
                ),
                None => println!("\n{} {}\n", "Bot:".blue().bold(), reply.response),
            }
        }
        Err(e) => println!("\n{} {}\n", "Error:".red().bold(), e),
    }
}
