use crate::parser::ParsedCommand;
use crate::registry::COMMANDS;

/// Fixed reply shown when `/calc` is invoked without an expression
pub const CALC_USAGE: &str = "Please provide a calculation. For example: /calc 5 + 3";

/// Translate a parsed command into the natural-language message sent to the
/// chat backend
///
/// Returns `None` for commands outside the known action set, which the
/// caller treats as "unknown command, do not forward". `/help` returns the
/// locally rendered help text and must never reach the backend; `/reset`
/// and `/clear` are not translated at all (callers intercept them first,
/// see [dispatch]).
pub fn to_message(command: &str, args: &str) -> Option<String> {
    match command {
        "calc" | "calculate" => {
            if args.is_empty() {
                Some(CALC_USAGE.to_string())
            } else {
                Some(format!("Calculate {}", args))
            }
        }
        "products" | "product" => {
            if args.is_empty() {
                Some("Show me all products".to_string())
            } else {
                Some(format!("Show me {}", args))
            }
        }
        "outlets" | "outlet" | "locations" => {
            if args.is_empty() {
                Some("Show me all outlets".to_string())
            } else {
                Some(format!("Find outlets in {}", args))
            }
        }
        "help" => Some(help_text()),
        _ => None,
    }
}

/// Render the help text for every registered command
///
/// One bulleted line per registry entry with a description, in registry
/// order.
pub fn help_text() -> String {
    let mut lines = vec!["Available commands:".to_string()];
    for cmd in COMMANDS {
        if !cmd.description.is_empty() {
            lines.push(format!("• /{} - {}", cmd.name, cmd.description));
        }
    }
    lines.join("\n")
}

/// What the client should do with a parsed slash command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandDispatch {
    /// Send this message to the chat backend
    Forward(String),
    /// Render this text locally; nothing goes over the wire
    Local(String),
    /// Clear the current conversation session
    ClearSession,
    /// Not a registered command; caller decides (forward verbatim or ignore)
    Unknown,
}

/// Resolve a parsed command into a client action
///
/// This is the interception layer the translator requires: `/reset` and
/// `/clear` become a local session clear, `/help` and an argument-less
/// `/calc` stay local, and everything else either forwards or is unknown.
pub fn dispatch(parsed: &ParsedCommand) -> CommandDispatch {
    match parsed.command.as_str() {
        "reset" | "clear" => CommandDispatch::ClearSession,
        "help" => CommandDispatch::Local(help_text()),
        "calc" | "calculate" if parsed.args.is_empty() => CommandDispatch::Local(CALC_USAGE.to_string()),
        _ => match to_message(&parsed.command, &parsed.args) {
            Some(message) => CommandDispatch::Forward(message),
            None => CommandDispatch::Unknown,
        },
    }
}
