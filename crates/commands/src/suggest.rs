use serde::Serialize;

use crate::registry::COMMANDS;

/// An autocomplete entry for a partially typed slash command
///
/// Regenerated on every keystroke while composing a command; `display` is
/// the slash-prefixed form rendered in the completion list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub command: &'static str,
    pub description: &'static str,
    pub display: String,
}

/// Return autocomplete suggestions for the given composer input
///
/// Non-command input yields nothing. A lone `/` yields the full menu in
/// registry order. Otherwise entries whose name starts with the case-folded
/// partial are returned, preserving registry order. No fuzzy matching and
/// no relevance ranking.
pub fn suggestions(input: &str) -> Vec<Suggestion> {
    let Some(partial) = input.strip_prefix('/') else {
        return Vec::new();
    };

    let partial = partial.to_lowercase();

    COMMANDS
        .iter()
        .filter(|cmd| cmd.name.starts_with(&partial))
        .map(|cmd| Suggestion {
            command: cmd.name,
            description: cmd.description,
            display: format!("/{}", cmd.name),
        })
        .collect()
}
