//! Slash-command handling and tool-badge detection for the chat client.
//!
//! Everything here is a synchronous pure function over strings: parsing
//! `/`-prefixed input, autocompleting against the static command registry,
//! translating recognized commands into the natural-language messages the
//! backend expects, and heuristically classifying bot replies for badge
//! display. No I/O, no shared mutable state; safe to call from any number
//! of concurrent render passes.

pub mod badge;
pub mod parser;
pub mod registry;
pub mod suggest;
pub mod translate;

pub use badge::{Badge, ToolUse, detect_tool};
pub use parser::{ParsedCommand, is_command, parse_command};
pub use registry::{COMMANDS, CommandInfo, find};
pub use suggest::{Suggestion, suggestions};
pub use translate::{CALC_USAGE, CommandDispatch, dispatch, help_text, to_message};
