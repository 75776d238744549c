//! Session-only recall of submitted lines.

/// Maximum number of remembered lines; the oldest are dropped first.
pub const MAX_HISTORY_ENTRIES: usize = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CommandHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl CommandHistory {
    pub(crate) fn push(&mut self, line: &str) {
        self.cursor = None;
        if line.trim().is_empty() {
            return;
        }
        self.entries.push(line.to_string());
        if self.entries.len() > MAX_HISTORY_ENTRIES {
            let overflow = self.entries.len() - MAX_HISTORY_ENTRIES;
            self.entries.drain(0..overflow);
        }
    }

    pub(crate) fn entries(&self) -> &[String] {
        &self.entries
    }

    pub(crate) fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    /// Moves the cursor by `direction` (-1 older, 1 newer) and returns the text for the buffer.
    ///
    /// `None` means the buffer is left alone (no history, or stepping newer with no walk in
    /// progress); `Some("")` means the walk passed the newest entry.
    pub(crate) fn step(&mut self, direction: i32) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }

        let next_index = match (self.cursor, direction) {
            (None, -1) => Some(self.entries.len() - 1),
            (None, _) => return None,
            (Some(index), -1) if index > 0 => Some(index - 1),
            (Some(index), 1) if index + 1 < self.entries.len() => Some(index + 1),
            (Some(_), 1) => None,
            (current, _) => current,
        };

        self.cursor = next_index;
        Some(
            next_index
                .and_then(|index| self.entries.get(index).cloned())
                .unwrap_or_default(),
        )
    }
}
