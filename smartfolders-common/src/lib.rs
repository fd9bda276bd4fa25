//! Common types and state machines shared by the Smart Folders front ends

pub mod config;
pub mod filter;
pub mod gesture;
pub mod icon;
pub mod params;
pub mod screen;
pub mod store;

use serde::{Deserialize, Serialize};

pub use filter::NoteFilter;
pub use icon::IconTag;

/// Folder identifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct FolderId(pub String);

impl FolderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FolderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Note identifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NoteId(pub String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accent color in `#RRGGBB` form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct AccentColor(String);

impl AccentColor {
    pub const DEFAULT: &'static str = "#6366F1";

    /// Parse a `#RRGGBB` hex color
    pub fn parse(value: &str) -> Result<Self> {
        let hex = value
            .strip_prefix('#')
            .ok_or_else(|| Error::InvalidColor(value.to_string()))?;

        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(value.to_string()));
        }

        Ok(Self(format!("#{}", hex.to_ascii_uppercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Same color with an alpha channel appended (`#RRGGBBAA`)
    pub fn with_alpha(&self, alpha: u8) -> String {
        format!("{}{:02X}", self.0, alpha)
    }
}

impl Default for AccentColor {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl TryFrom<String> for AccentColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<AccentColor> for String {
    fn from(color: AccentColor) -> Self {
        color.0
    }
}

impl std::fmt::Display for AccentColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Smart folder as shown on the home grid and in the move sheet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FolderSummary {
    pub id: FolderId,
    pub name: String,
    pub description: String,
    pub item_count: u32,
    pub color: AccentColor,
    #[serde(deserialize_with = "icon::deserialize_or_folder")]
    pub icon: IconTag,
}

/// How a note was captured
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CaptureKind {
    Voice,
    Typed,
}

impl CaptureKind {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Voice => "🎙",
            Self::Typed => "✏️",
        }
    }
}

impl std::fmt::Display for CaptureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Voice => write!(f, "voice"),
            Self::Typed => write!(f, "typed"),
        }
    }
}

/// Note row in a folder listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoteSummary {
    pub id: NoteId,
    pub kind: CaptureKind,
    pub timestamp: String, // display string, e.g. "Today, 2:34 PM"
    pub content: String,
    #[serde(default)]
    pub starred: bool,
}

/// Header line for a folder: "24 Snippets • 5 Voice Notes"
pub fn folder_stats(notes: &[NoteSummary]) -> String {
    let voice = notes
        .iter()
        .filter(|note| note.kind == CaptureKind::Voice)
        .count();
    format!("{} Snippets • {} Voice Notes", notes.len(), voice)
}

/// Error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Note is already in folder {0}")]
    SameFolder(String),

    #[error("Not supported: {0}")]
    Unsupported(&'static str),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
