//! Data-driven command table.

use std::fmt;

use console_contract::{CommandSummary, OutputPayload, SectionId, SectionListing};
use platform_host::ClockTime;
use thiserror::Error;

/// Inputs available to a command renderer.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext<'a> {
    /// Table the command was resolved from.
    pub table: &'a CommandTable,
    /// Active section before the command runs.
    pub active_section: SectionId,
    /// Section the command targets, if any.
    pub section: Option<SectionId>,
    /// Wall-clock time captured at submission.
    pub now: ClockTime,
}

/// Renders one output payload.
pub type RenderFn = fn(&CommandContext<'_>) -> OutputPayload;

/// What a command does to the transcript.
#[derive(Clone, Copy)]
pub enum CommandEffect {
    /// Append the rendered payload.
    Render(RenderFn),
    /// Truncate the transcript to empty.
    ClearTranscript,
}

impl fmt::Debug for CommandEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(_) => f.write_str("Render(..)"),
            Self::ClearTranscript => f.write_str("ClearTranscript"),
        }
    }
}

/// One command registration.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// Lowercase name as typed.
    pub name: &'static str,
    /// One-line help text.
    pub summary: &'static str,
    /// Section made active when the command runs.
    pub section: Option<SectionId>,
    /// Transcript effect.
    pub effect: CommandEffect,
}

/// Lookup failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    /// No command is registered under the given input.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

const fn section_command(section: SectionId, name: &'static str, summary: &'static str) -> CommandSpec {
    CommandSpec {
        name,
        summary,
        section: Some(section),
        effect: CommandEffect::Render(render_section),
    }
}

/// Built-in commands in canonical (completion and help) order.
pub static BUILTIN_COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        summary: "Show this help message",
        section: None,
        effect: CommandEffect::Render(render_help),
    },
    CommandSpec {
        name: "clear",
        summary: "Clear the console",
        section: None,
        effect: CommandEffect::ClearTranscript,
    },
    section_command(SectionId::Home, "home", "Display home section"),
    section_command(SectionId::About, "about", "Display about section"),
    section_command(SectionId::Education, "education", "Display education section"),
    section_command(SectionId::Skills, "skills", "Display skills section"),
    section_command(SectionId::Experience, "experience", "Display experience section"),
    section_command(SectionId::Projects, "projects", "Display projects section"),
    section_command(SectionId::Contact, "contact", "Display contact section"),
    CommandSpec {
        name: "ls",
        summary: "List all sections",
        section: None,
        effect: CommandEffect::Render(render_section_list),
    },
    CommandSpec {
        name: "time",
        summary: "Show current time",
        section: None,
        effect: CommandEffect::Render(render_time),
    },
];

/// Ordered, immutable command registry.
#[derive(Debug, Clone, Copy)]
pub struct CommandTable {
    commands: &'static [CommandSpec],
}

impl PartialEq for CommandTable {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.commands, other.commands)
    }
}

impl Eq for CommandTable {}

impl Default for CommandTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CommandTable {
    /// Wraps a custom registration list. Names must be lowercase to be reachable.
    pub const fn new(commands: &'static [CommandSpec]) -> Self {
        Self { commands }
    }

    /// Returns the portfolio command vocabulary.
    pub fn builtin() -> Self {
        Self {
            commands: BUILTIN_COMMANDS,
        }
    }

    /// Returns all registrations in declared order.
    pub fn commands(&self) -> &'static [CommandSpec] {
        self.commands
    }

    /// Returns command names in declared order.
    pub fn names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|command| command.name).collect()
    }

    /// Returns help lines in declared order.
    pub fn summaries(&self) -> Vec<CommandSummary> {
        self.commands
            .iter()
            .map(|command| CommandSummary {
                name: command.name.to_string(),
                summary: command.summary.to_string(),
            })
            .collect()
    }

    /// Resolves an already-normalized (trimmed, lowercase) command name.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::UnknownCommand`] when nothing is registered under `name`.
    pub fn resolve(&self, name: &str) -> Result<&'static CommandSpec, ConsoleError> {
        self.commands
            .iter()
            .find(|command| command.name == name)
            .ok_or_else(|| ConsoleError::UnknownCommand(name.to_string()))
    }

    /// Returns the command that displays `section`.
    pub fn section_command(&self, section: SectionId) -> Option<&'static CommandSpec> {
        self.commands
            .iter()
            .find(|command| command.section == Some(section))
    }
}

fn render_help(ctx: &CommandContext<'_>) -> OutputPayload {
    OutputPayload::Help {
        commands: ctx.table.summaries(),
    }
}

fn render_section_list(ctx: &CommandContext<'_>) -> OutputPayload {
    OutputPayload::SectionList {
        sections: SectionId::ALL
            .into_iter()
            .map(|section| SectionListing {
                section,
                active: section == ctx.active_section,
            })
            .collect(),
    }
}

fn render_time(ctx: &CommandContext<'_>) -> OutputPayload {
    OutputPayload::Time {
        text: ctx.now.hms(),
    }
}

fn render_section(ctx: &CommandContext<'_>) -> OutputPayload {
    OutputPayload::Section {
        section: ctx.section.unwrap_or(ctx.active_section),
    }
}
