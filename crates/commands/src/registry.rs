/// A slash command known to the client
///
/// The registry is static: defined at process start, immutable for the
/// process lifetime. Names are unique and always lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// All registered slash commands, in declaration order
///
/// Suggestion lists and the help text preserve this ordering.
pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo { name: "calc", description: "Calculate a math expression" },
    CommandInfo { name: "calculate", description: "Calculate a math expression" },
    CommandInfo { name: "products", description: "Search drinkware products" },
    CommandInfo { name: "product", description: "Search drinkware products" },
    CommandInfo { name: "outlets", description: "Find outlet locations" },
    CommandInfo { name: "outlet", description: "Find outlet locations" },
    CommandInfo { name: "locations", description: "Find outlet locations" },
    CommandInfo { name: "reset", description: "Clear the conversation" },
    CommandInfo { name: "clear", description: "Clear the conversation" },
    CommandInfo { name: "help", description: "Show available commands" },
];

/// Look up a command by its (lowercase) name
pub fn find(name: &str) -> Option<&'static CommandInfo> {
    COMMANDS.iter().find(|cmd| cmd.name == name)
}
