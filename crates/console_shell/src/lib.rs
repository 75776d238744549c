//! Headless command interpreter for the portfolio console.
//!
//! [`CommandConsole`] owns the transcript, the active section, and the input line. Commands
//! are resolved against a data-driven [`CommandTable`], so every registration goes through the
//! same echo and error handling. Nothing here depends on Leptos or browser APIs; callers pass
//! the wall-clock time in with each submission.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod completion;
mod console;
mod history;
mod table;

pub use completion::{complete_input, cycle_candidate, longest_common_prefix, matching_commands};
pub use console::CommandConsole;
pub use history::MAX_HISTORY_ENTRIES;
pub use table::{
    CommandContext, CommandEffect, CommandSpec, CommandTable, ConsoleError, RenderFn,
    BUILTIN_COMMANDS,
};

/// Returns the built-in command names in declared order, for help or hint UIs.
pub fn command_vocabulary() -> Vec<&'static str> {
    CommandTable::builtin().names()
}
