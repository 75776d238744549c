//! Shared console contracts used by the headless command console, the desktop reducer, and the
//! console UI.
//!
//! This crate is intentionally runtime-agnostic. It defines the section vocabulary, transcript
//! entries, and output payloads without depending on Leptos, browser APIs, or desktop runtime
//! internals. Payloads describe *what* to show; turning a [`OutputPayload::Section`] into markup
//! is the job of a section content provider in the UI layer.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the fixed portfolio content categories.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    /// Landing summary.
    #[default]
    Home,
    /// Biography.
    About,
    /// Schooling.
    Education,
    /// Skill matrix.
    Skills,
    /// Work history.
    Experience,
    /// Project showcase.
    Projects,
    /// Contact details.
    Contact,
}

impl SectionId {
    /// Every section in canonical navigation order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Education,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Stable lowercase identifier, which doubles as the section's console command name.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Education => "education",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Education => "Education",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Parses a stable identifier (case-insensitive).
    pub fn from_id(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(raw.trim()))
    }

    /// Position within [`SectionId::ALL`].
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|section| *section == self)
            .unwrap_or(0)
    }

    /// Steps `delta` positions through [`SectionId::ALL`], wrapping at both ends.
    pub fn step(self, delta: i32) -> Self {
        let len = Self::ALL.len() as i32;
        let next = (self.index() as i32 + delta).rem_euclid(len) as usize;
        Self::ALL[next]
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Session-unique transcript entry identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId(pub u64);

/// Help line for one registered command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSummary {
    /// Command name as typed.
    pub name: String,
    /// One-line description.
    pub summary: String,
}

/// One row of the `ls` listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionListing {
    /// Listed section.
    pub section: SectionId,
    /// Whether this section was active when the listing was produced.
    pub active: bool,
}

impl SectionListing {
    /// Two-column prefix: `"> "` for the active row, blank otherwise.
    pub fn marker(&self) -> &'static str {
        if self.active {
            "> "
        } else {
            "  "
        }
    }

    /// Display label shown for the row.
    pub fn label(&self) -> &'static str {
        self.section.label()
    }
}

/// Renderable console output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum OutputPayload {
    /// Fixed greeting shown on boot and after the window is closed.
    Welcome,
    /// Prompt line repeating the submitted text.
    Echo {
        /// Trimmed text exactly as typed (case preserved).
        text: String,
    },
    /// Command reference.
    Help {
        /// Commands in table order.
        commands: Vec<CommandSummary>,
    },
    /// Section listing produced by `ls`.
    SectionList {
        /// Sections in canonical order.
        sections: Vec<SectionListing>,
    },
    /// Wall-clock time produced by `time`.
    Time {
        /// Formatted `HH:MM:SS`.
        text: String,
    },
    /// Section body; content is resolved by the UI's section content provider.
    Section {
        /// Section to render.
        section: SectionId,
    },
    /// Non-fatal error for input that matched no command.
    UnknownCommand {
        /// Offending input (trimmed, case preserved).
        input: String,
    },
}

impl OutputPayload {
    /// Returns a plain-text rendition, used for accessibility labels and logs.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Welcome => "Welcome to the Portfolio Terminal".to_string(),
            Self::Echo { text } => format!("> {text}"),
            Self::Help { commands } => commands
                .iter()
                .map(|command| format!("{} - {}", command.name, command.summary))
                .collect::<Vec<_>>()
                .join("\n"),
            Self::SectionList { sections } => sections
                .iter()
                .map(|row| format!("{}{}", row.marker(), row.label()))
                .collect::<Vec<_>>()
                .join("\n"),
            Self::Time { text } => format!("Current time: {text}"),
            Self::Section { section } => section.label().to_string(),
            Self::UnknownCommand { input } => format!("unknown command: {input}"),
        }
    }

    /// Returns whether this payload reports an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::UnknownCommand { .. })
    }
}

/// One transcript row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputEntry {
    /// Session-unique identifier, usable as a keyed-list key.
    pub id: EntryId,
    /// Renderable payload.
    pub payload: OutputPayload,
}
