//! Sticky-note operations.

use crate::ids;
use crate::model::document::Note;
use crate::storage::StorageBackend;
use crate::store::{Store, StoreResult};

/// Input for a new note; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub color: String,
}

impl<S: StorageBackend> Store<S> {
    pub fn notes(&self) -> &[Note] {
        &self.doc.notes
    }

    /// Appends a new note and returns its assigned id.
    pub fn add_note(&mut self, note: NewNote) -> StoreResult<i64> {
        let id = ids::next_id();
        self.doc.notes.push(Note {
            id,
            title: note.title,
            content: note.content,
            color: note.color,
        });
        self.persist()?;
        Ok(id)
    }

    /// Replaces the note with the same id wholesale. Unknown ids are a
    /// silent no-op and do not persist.
    pub fn update_note(&mut self, note: Note) -> StoreResult<()> {
        let Some(slot) = self.doc.notes.iter_mut().find(|n| n.id == note.id) else {
            return Ok(());
        };
        *slot = note;
        self.persist()
    }

    pub fn delete_note(&mut self, id: i64) -> StoreResult<()> {
        let before = self.doc.notes.len();
        self.doc.notes.retain(|note| note.id != id);
        if self.doc.notes.len() == before {
            return Ok(());
        }
        self.persist()
    }
}
