//! Data providers for folders and notes
//!
//! Screens never reach for mock data directly; they receive a
//! [`NoteStore`] and go through it.

use crate::{AccentColor, CaptureKind, Error, FolderId, FolderSummary, IconTag, NoteId, NoteSummary, Result};

/// Confirmation of a note move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReceipt {
    pub note_id: NoteId,
    pub from: FolderId,
    pub to: FolderId,
    pub destination_name: String,
}

/// Backing store contract for the screens
pub trait NoteStore {
    /// Folders shown on the home grid
    fn list_folders(&self) -> Vec<FolderSummary>;

    /// Destinations offered by the move sheet
    fn move_destinations(&self) -> Vec<FolderSummary> {
        self.list_folders()
    }

    fn list_notes(&self, folder_id: &FolderId) -> Result<Vec<NoteSummary>>;

    fn move_note(&self, note_id: &NoteId, destination: &FolderId) -> Result<MoveReceipt>;

    fn delete_note(&self, note_id: &NoteId) -> Result<()>;

    /// Pre-computed insight line for a folder, if any
    fn insight(&self, folder_id: &FolderId) -> Option<String>;
}

struct NoteRecord {
    folder: FolderId,
    note: NoteSummary,
}

/// Read-only store over fixed sample data
///
/// Moves are validated and acknowledged but nothing is relocated, and
/// deletion is refused.
pub struct StaticStore {
    folders: Vec<FolderSummary>,
    destinations: Vec<FolderSummary>,
    notes: Vec<NoteRecord>,
    insights: Vec<(FolderId, String)>,
}

impl StaticStore {
    pub fn new(
        folders: Vec<FolderSummary>,
        destinations: Vec<FolderSummary>,
        notes: Vec<(FolderId, NoteSummary)>,
    ) -> Self {
        Self {
            folders,
            destinations,
            notes: notes
                .into_iter()
                .map(|(folder, note)| NoteRecord { folder, note })
                .collect(),
            insights: Vec::new(),
        }
    }

    pub fn with_insight(mut self, folder_id: FolderId, insight: impl Into<String>) -> Self {
        self.insights.push((folder_id, insight.into()));
        self
    }

    /// The sample content the app ships with
    pub fn sample() -> Self {
        let folders = vec![
            folder("1", "Present Ideas", "Mom's birthday gift - handmade jewelry or", 3, "#6366F1", IconTag::Gift),
            folder("2", "Quick To-Do", "Call dentist for appointment tomorrow", 7, "#EC4899", IconTag::Check),
            folder("3", "Random Thoughts", "What if plants could communicate through", 12, "#06B6D4", IconTag::Lightbulb),
            folder("4", "Work Notes", "Meeting with client about new project", 5, "#10B981", IconTag::Briefcase),
            folder("5", "Learning", "Spanish vocabulary: mañana means", 8, "#F59E0B", IconTag::Book),
        ];

        let destinations = vec![
            folder("d1", "Work Documents", "", 24, "#3B82F6", IconTag::Briefcase),
            folder("d2", "Personal", "", 18, "#8B5CF6", IconTag::Folder),
            folder("d3", "Projects", "", 42, "#10B981", IconTag::Lightbulb),
            folder("d4", "Archive", "", 156, "#F59E0B", IconTag::Archive),
            folder("d5", "Photos", "", 89, "#EC4899", IconTag::Image),
            folder("d6", "Downloads", "", 31, "#6366F1", IconTag::Download),
        ];

        let gifts = FolderId::new("1");
        let notes = [
            ("1", CaptureKind::Voice, "Today, 2:34 PM", "Check out the Sony WH-1000XM5 headphones for Mom's birthday. She...", false),
            ("2", CaptureKind::Voice, "Dec 20, 10:42 AM", "Look into spa day package at that new wellness center downtown. She's been...", true),
            ("3", CaptureKind::Typed, "Dec 18, 3:15 PM", "Kindle Paperwhite - she loves reading but complains about carrying books around. The...", false),
            ("4", CaptureKind::Voice, "Dec 15, 8:22 AM", "Maybe a cooking class subscription? She's been watching a lot of cooking...", false),
            ("5", CaptureKind::Typed, "Dec 12, 4:50 PM", "Smart plant sensor for her garden. She always forgets to water her plants. Something...", true),
            ("6", CaptureKind::Voice, "Dec 10, 11:30 AM", "Photo album with family pictures from this year. Could use Shutterfly or Artifact...", false),
        ]
        .into_iter()
        .map(|(id, kind, timestamp, content, starred)| {
            let note = NoteSummary {
                id: NoteId::new(id),
                kind,
                timestamp: timestamp.to_string(),
                content: content.to_string(),
                starred,
            };
            (gifts.clone(), note)
        })
        .collect();

        Self::new(folders, destinations, notes).with_insight(
            gifts,
            "You've mentioned 'Sony Headphones' and 'Mom's Birthday' 3 times this month.",
        )
    }

    fn find_folder(&self, id: &FolderId) -> Option<&FolderSummary> {
        self.folders
            .iter()
            .chain(self.destinations.iter())
            .find(|folder| &folder.id == id)
    }
}

impl NoteStore for StaticStore {
    fn list_folders(&self) -> Vec<FolderSummary> {
        self.folders.clone()
    }

    fn move_destinations(&self) -> Vec<FolderSummary> {
        if self.destinations.is_empty() {
            self.folders.clone()
        } else {
            self.destinations.clone()
        }
    }

    fn list_notes(&self, folder_id: &FolderId) -> Result<Vec<NoteSummary>> {
        if self.find_folder(folder_id).is_none() {
            return Err(Error::FolderNotFound(folder_id.to_string()));
        }

        Ok(self
            .notes
            .iter()
            .filter(|record| &record.folder == folder_id)
            .map(|record| record.note.clone())
            .collect())
    }

    fn move_note(&self, note_id: &NoteId, destination: &FolderId) -> Result<MoveReceipt> {
        let record = self
            .notes
            .iter()
            .find(|record| &record.note.id == note_id)
            .ok_or_else(|| Error::NoteNotFound(note_id.to_string()))?;

        let target = self
            .find_folder(destination)
            .ok_or_else(|| Error::FolderNotFound(destination.to_string()))?;

        if &record.folder == destination {
            return Err(Error::SameFolder(target.name.clone()));
        }

        tracing::info!(note = %note_id, from = %record.folder, to = %destination, "note move accepted");

        Ok(MoveReceipt {
            note_id: note_id.clone(),
            from: record.folder.clone(),
            to: destination.clone(),
            destination_name: target.name.clone(),
        })
    }

    fn delete_note(&self, note_id: &NoteId) -> Result<()> {
        if !self.notes.iter().any(|record| &record.note.id == note_id) {
            return Err(Error::NoteNotFound(note_id.to_string()));
        }
        Err(Error::Unsupported("deleting notes"))
    }

    fn insight(&self, folder_id: &FolderId) -> Option<String> {
        self.insights
            .iter()
            .find(|(id, _)| id == folder_id)
            .map(|(_, insight)| insight.clone())
    }
}

fn folder(id: &str, name: &str, description: &str, item_count: u32, color: &str, icon: IconTag) -> FolderSummary {
    FolderSummary {
        id: FolderId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        item_count,
        color: AccentColor::parse(color).unwrap_or_default(),
        icon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_folders() {
        let store = StaticStore::sample();
        let folders = store.list_folders();
        assert_eq!(folders.len(), 5);
        assert_eq!(folders[0].name, "Present Ideas");
        assert_eq!(folders[4].icon, IconTag::Book);
        assert_eq!(store.move_destinations().len(), 6);
    }

    #[test]
    fn test_list_notes() {
        let store = StaticStore::sample();
        let notes = store.list_notes(&FolderId::new("1")).unwrap();
        assert_eq!(notes.len(), 6);
        assert_eq!(notes.iter().filter(|n| n.starred).count(), 2);

        assert!(store.list_notes(&FolderId::new("2")).unwrap().is_empty());
        assert_eq!(
            store.list_notes(&FolderId::new("404")),
            Err(Error::FolderNotFound("404".to_string()))
        );
    }

    #[test]
    fn test_move_note() {
        let store = StaticStore::sample();
        let receipt = store.move_note(&NoteId::new("3"), &FolderId::new("d4")).unwrap();
        assert_eq!(receipt.from, FolderId::new("1"));
        assert_eq!(receipt.destination_name, "Archive");

        // nothing is relocated
        assert_eq!(store.list_notes(&FolderId::new("1")).unwrap().len(), 6);
    }

    #[test]
    fn test_move_note_errors() {
        let store = StaticStore::sample();
        assert!(matches!(
            store.move_note(&NoteId::new("99"), &FolderId::new("d1")),
            Err(Error::NoteNotFound(_))
        ));
        assert!(matches!(
            store.move_note(&NoteId::new("1"), &FolderId::new("nope")),
            Err(Error::FolderNotFound(_))
        ));
        assert_eq!(
            store.move_note(&NoteId::new("1"), &FolderId::new("1")),
            Err(Error::SameFolder("Present Ideas".to_string()))
        );
    }

    #[test]
    fn test_delete_is_refused() {
        let store = StaticStore::sample();
        assert_eq!(store.delete_note(&NoteId::new("1")), Err(Error::Unsupported("deleting notes")));
        assert!(matches!(store.delete_note(&NoteId::new("x")), Err(Error::NoteNotFound(_))));
    }

    #[test]
    fn test_insight() {
        let store = StaticStore::sample();
        assert!(store.insight(&FolderId::new("1")).unwrap().contains("Sony Headphones"));
        assert_eq!(store.insight(&FolderId::new("2")), None);
    }
}
