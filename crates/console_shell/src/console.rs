use console_contract::{EntryId, OutputEntry, OutputPayload, SectionId};
use platform_host::ClockTime;

use crate::{
    completion::{complete_input, cycle_candidate, is_ambiguous, matching_commands},
    history::CommandHistory,
    table::{CommandContext, CommandEffect, CommandTable, ConsoleError},
};

/// Command interpreter state: transcript, active section, and the line being typed.
///
/// Every submitted non-empty line appends one echo entry followed by one result entry, except
/// `clear`, whose net effect is an empty transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandConsole {
    table: CommandTable,
    transcript: Vec<OutputEntry>,
    active_section: SectionId,
    input: String,
    next_entry_id: u64,
    history: CommandHistory,
    completion_seed: Option<String>,
}

impl Default for CommandConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandConsole {
    /// Creates a console over the built-in command table, showing only the welcome entry.
    pub fn new() -> Self {
        Self::with_table(CommandTable::builtin())
    }

    /// Creates a console over `table`, showing only the welcome entry.
    pub fn with_table(table: CommandTable) -> Self {
        let mut console = Self {
            table,
            transcript: Vec::new(),
            active_section: SectionId::default(),
            input: String::new(),
            next_entry_id: 1,
            history: CommandHistory::default(),
            completion_seed: None,
        };
        console.push_entry(OutputPayload::Welcome);
        console
    }

    /// Ordered transcript entries.
    pub fn transcript(&self) -> &[OutputEntry] {
        &self.transcript
    }

    /// Section most recently displayed by a section command.
    pub fn active_section(&self) -> SectionId {
        self.active_section
    }

    /// In-progress input line.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Command vocabulary backing this console.
    pub fn table(&self) -> CommandTable {
        self.table
    }

    /// Previously submitted lines, oldest first.
    pub fn history(&self) -> &[String] {
        self.history.entries()
    }

    /// Replaces the input line with user-typed text, ending any completion cycle.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.completion_seed = None;
        self.history.reset_cursor();
    }

    /// Submits the current input line.
    pub fn submit_input(&mut self, now: ClockTime) {
        let line = std::mem::take(&mut self.input);
        self.submit(&line, now);
    }

    /// Interprets one raw line and appends its echo and result.
    ///
    /// Whitespace-only lines are ignored. Lookup is case-insensitive; the echo and any
    /// unknown-command error keep the text as typed (trimmed).
    pub fn submit(&mut self, raw_line: &str, now: ClockTime) {
        self.input.clear();
        self.completion_seed = None;

        let trimmed = raw_line.trim();
        let normalized = trimmed.to_lowercase();
        if normalized.is_empty() {
            self.history.reset_cursor();
            return;
        }

        self.history.push(trimmed);
        self.push_entry(OutputPayload::Echo {
            text: trimmed.to_string(),
        });

        match self.table.resolve(&normalized) {
            Ok(command) => match command.effect {
                CommandEffect::ClearTranscript => self.transcript.clear(),
                CommandEffect::Render(render) => {
                    let payload = render(&CommandContext {
                        table: &self.table,
                        active_section: self.active_section,
                        section: command.section,
                        now,
                    });
                    self.push_entry(payload);
                    if let Some(section) = command.section {
                        self.active_section = section;
                    }
                }
            },
            Err(ConsoleError::UnknownCommand(_)) => self.push_entry(OutputPayload::UnknownCommand {
                input: trimmed.to_string(),
            }),
        }
    }

    /// Tab-completes the input line.
    ///
    /// Follows [`complete_input`]; when the input is ambiguous, repeated calls keep cycling
    /// through the candidates of the prefix that started the cycle until the line is edited.
    pub fn complete(&mut self) {
        let names = self.table.names();

        if let Some(seed) = self.completion_seed.as_deref() {
            let matches = matching_commands(seed, &names);
            if matches
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(&self.input))
            {
                if let Some(next) = cycle_candidate(&self.input, &matches) {
                    self.input = next.to_string();
                }
                return;
            }
        }

        self.completion_seed = is_ambiguous(&self.input, &names).then(|| self.input.clone());
        self.input = complete_input(&self.input, &names);
    }

    /// Recalls the previous (older) history line into the input.
    pub fn history_previous(&mut self) {
        self.step_history(-1);
    }

    /// Recalls the next (newer) history line, clearing the input after the newest.
    pub fn history_next(&mut self) {
        self.step_history(1);
    }

    /// Runs the section command `delta` steps away from the active section.
    pub fn navigate_section(&mut self, delta: i32, now: ClockTime) {
        let target = self.active_section.step(delta);
        self.run_section(target, now);
    }

    /// Runs the command that displays `section`.
    pub fn run_section(&mut self, section: SectionId, now: ClockTime) {
        let name = self
            .table
            .section_command(section)
            .map(|command| command.name)
            .unwrap_or_else(|| section.id());
        self.submit(name, now);
    }

    /// Truncates the transcript to the welcome entry and clears the input line.
    pub fn reset_to_welcome(&mut self) {
        self.transcript.clear();
        self.input.clear();
        self.completion_seed = None;
        self.history.reset_cursor();
        self.push_entry(OutputPayload::Welcome);
    }

    fn step_history(&mut self, direction: i32) {
        if let Some(text) = self.history.step(direction) {
            self.input = text;
            self.completion_seed = None;
        }
    }

    fn push_entry(&mut self, payload: OutputPayload) {
        let id = EntryId(self.next_entry_id);
        self.next_entry_id = self.next_entry_id.saturating_add(1);
        self.transcript.push(OutputEntry { id, payload });
    }
}
