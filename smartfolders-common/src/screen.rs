//! Screen-local state of the folder detail screen

use std::collections::HashSet;

use crate::store::{MoveReceipt, NoteStore};
use crate::{FolderId, NoteFilter, NoteId, NoteSummary, Result};

/// Move-to-folder sheet flow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveFlow {
    note: Option<NoteId>,
    destination: Option<FolderId>,
}

impl MoveFlow {
    /// A note's Move action opens the sheet
    pub fn begin(&mut self, note: NoteId) {
        self.note = Some(note);
        self.destination = None;
    }

    pub fn is_open(&self) -> bool {
        self.note.is_some()
    }

    pub fn note(&self) -> Option<&NoteId> {
        self.note.as_ref()
    }

    pub fn destination(&self) -> Option<&FolderId> {
        self.destination.as_ref()
    }

    pub fn select(&mut self, destination: FolderId) {
        if self.is_open() {
            self.destination = Some(destination);
        }
    }

    /// The Move button is disabled until a destination is picked
    pub fn can_confirm(&self) -> bool {
        self.note.is_some() && self.destination.is_some()
    }

    /// Run the move and close the flow; `None` when nothing can be confirmed
    pub fn confirm(&mut self, store: &dyn NoteStore) -> Option<Result<MoveReceipt>> {
        if !self.can_confirm() {
            return None;
        }
        let note = self.note.take()?;
        let destination = self.destination.take()?;
        Some(store.move_note(&note, &destination))
    }

    /// Cancel, close button, backdrop tap or swipe-down
    pub fn cancel(&mut self) {
        self.note = None;
        self.destination = None;
    }
}

/// Filter and star state of the note list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteListState {
    filter: NoteFilter,
    toggled: HashSet<NoteId>,
}

impl NoteListState {
    pub fn filter(&self) -> NoteFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: NoteFilter) {
        self.filter = filter;
    }

    /// Flip a note's star locally
    pub fn toggle_star(&mut self, note: &NoteId) {
        if !self.toggled.remove(note) {
            self.toggled.insert(note.clone());
        }
    }

    /// Notes with local star toggles applied
    pub fn resolve(&self, notes: &[NoteSummary]) -> Vec<NoteSummary> {
        notes
            .iter()
            .map(|note| {
                let mut note = note.clone();
                if self.toggled.contains(&note.id) {
                    note.starred = !note.starred;
                }
                note
            })
            .collect()
    }

    /// Notes visible under the active filter
    pub fn visible(&self, notes: &[NoteSummary]) -> Vec<NoteSummary> {
        let resolved = self.resolve(notes);
        self.filter.apply(&resolved).into_iter().cloned().collect()
    }
}
