use serde::{Deserialize, Serialize};

/// A parsed slash command: the lowercased command token plus its arguments
///
/// Ephemeral: derived from one input string and discarded after dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommand {
    pub command: String,
    pub args: String,
}

/// Returns true iff the trimmed input starts with `/`
///
/// Empty input is never a command.
pub fn is_command(input: &str) -> bool {
    input.trim().starts_with('/')
}

/// Parse a slash command from raw user input
///
/// Strips the leading `/`, splits the remainder on whitespace runs,
/// lowercases the first token and joins the rest with single spaces.
/// Returns `None` for non-command input and for a lone `/`.
pub fn parse_command(input: &str) -> Option<ParsedCommand> {
    let trimmed = input.trim();
    let rest = trimmed.strip_prefix('/')?;

    let mut parts = rest.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args = parts.collect::<Vec<_>>().join(" ");

    Some(ParsedCommand { command, args })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_command_basic() {
        assert!(is_command("/calc"));
        assert!(is_command("  /calc"));
        assert!(is_command("/"));
    }

    #[test]
    fn test_is_command_rejects_plain_text() {
        assert!(!is_command(""));
        assert!(!is_command("   "));
        assert!(!is_command("hello"));
        assert!(!is_command("calc /5+3"));
    }

    #[test]
    fn test_is_command_on_absent_input() {
        let input: Option<&str> = None;
        assert!(!input.map_or(false, is_command));
    }

    #[test]
    fn test_parse_command_with_args() {
        let parsed = parse_command("/calc 5 + 3").unwrap();
        assert_eq!(parsed.command, "calc");
        assert_eq!(parsed.args, "5 + 3");
    }

    #[test]
    fn test_parse_command_case_folded() {
        let parsed = parse_command("/CALC").unwrap();
        assert_eq!(parsed.command, "calc");
        assert_eq!(parsed.args, "");
    }

    #[test]
    fn test_parse_command_args_case_preserved() {
        let parsed = parse_command("/outlets Petaling Jaya").unwrap();
        assert_eq!(parsed.command, "outlets");
        assert_eq!(parsed.args, "Petaling Jaya");
    }

    #[test]
    fn test_parse_command_lone_slash() {
        assert_eq!(parse_command("/"), None);
        assert_eq!(parse_command("  /  "), None);
    }

    #[test]
    fn test_parse_command_non_command() {
        assert_eq!(parse_command("hello there"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn test_parse_command_collapses_whitespace() {
        let parsed = parse_command("  /products   ice   tumbler  ").unwrap();
        assert_eq!(parsed.command, "products");
        assert_eq!(parsed.args, "ice tumbler");
    }
}
