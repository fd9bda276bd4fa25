//! Note list filters for the folder detail screen

use serde::{Deserialize, Serialize};

use crate::{CaptureKind, NoteSummary};

/// Single-select display filter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum NoteFilter {
    #[default]
    All,
    Voice,
    Typed,
    Starred,
}

impl NoteFilter {
    /// Chip order on screen
    pub const ALL: [NoteFilter; 4] = [Self::All, Self::Voice, Self::Typed, Self::Starred];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Voice => "🎙 Voice",
            Self::Typed => "✏️ Typed",
            Self::Starred => "⭐ Starred",
        }
    }

    pub fn matches(self, note: &NoteSummary) -> bool {
        match self {
            Self::All => true,
            Self::Voice => note.kind == CaptureKind::Voice,
            Self::Typed => note.kind == CaptureKind::Typed,
            Self::Starred => note.starred,
        }
    }

    /// Visible notes, in their original order
    pub fn apply<'a>(self, notes: &'a [NoteSummary]) -> Vec<&'a NoteSummary> {
        notes.iter().filter(|note| self.matches(note)).collect()
    }
}

impl std::fmt::Display for NoteFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Voice => write!(f, "voice"),
            Self::Typed => write!(f, "typed"),
            Self::Starred => write!(f, "starred"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoteId;

    fn notes() -> Vec<NoteSummary> {
        [
            ("1", CaptureKind::Voice, false),
            ("2", CaptureKind::Voice, true),
            ("3", CaptureKind::Typed, false),
            ("4", CaptureKind::Voice, false),
            ("5", CaptureKind::Typed, true),
            ("6", CaptureKind::Voice, false),
        ]
        .into_iter()
        .map(|(id, kind, starred)| NoteSummary {
            id: NoteId::new(id),
            kind,
            timestamp: String::new(),
            content: format!("note {}", id),
            starred,
        })
        .collect()
    }

    fn ids(visible: &[&NoteSummary]) -> Vec<String> {
        visible.iter().map(|note| note.id.0.clone()).collect()
    }

    #[test]
    fn test_all_keeps_everything() {
        let notes = notes();
        assert_eq!(NoteFilter::All.apply(&notes).len(), 6);
    }

    #[test]
    fn test_voice_keeps_order() {
        let notes = notes();
        assert_eq!(ids(&NoteFilter::Voice.apply(&notes)), vec!["1", "2", "4", "6"]);
    }

    #[test]
    fn test_typed_and_starred() {
        let notes = notes();
        assert_eq!(ids(&NoteFilter::Typed.apply(&notes)), vec!["3", "5"]);
        assert_eq!(ids(&NoteFilter::Starred.apply(&notes)), vec!["2", "5"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let notes = notes();
        for filter in NoteFilter::ALL {
            let once: Vec<NoteSummary> = filter.apply(&notes).into_iter().cloned().collect();
            let twice = filter.apply(&once);
            assert_eq!(ids(&twice), ids(&once.iter().collect::<Vec<_>>()));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(NoteFilter::default(), NoteFilter::All);
        assert_eq!(NoteFilter::Voice.label(), "🎙 Voice");
        assert_eq!(NoteFilter::Starred.to_string(), "starred");
    }
}
