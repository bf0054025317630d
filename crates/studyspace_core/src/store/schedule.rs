//! Weekly class schedule operations.

use crate::ids;
use crate::model::document::{EventKind, ScheduleEvent};
use crate::storage::StorageBackend;
use crate::store::{Store, StoreResult};

/// Input for a new schedule slot; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub day: String,
    pub time: String,
    pub title: String,
    pub kind: EventKind,
    pub color: String,
}

impl<S: StorageBackend> Store<S> {
    pub fn events(&self) -> &[ScheduleEvent] {
        &self.doc.events
    }

    /// Appends a new event and returns its assigned id.
    pub fn add_event(&mut self, event: NewEvent) -> StoreResult<i64> {
        let id = ids::next_id();
        self.doc.events.push(ScheduleEvent {
            id,
            day: event.day,
            time: event.time,
            title: event.title,
            kind: event.kind,
            color: event.color,
        });
        self.persist()?;
        Ok(id)
    }

    /// Replaces the event with the same id wholesale. Unknown ids are a
    /// silent no-op and do not persist.
    pub fn update_event(&mut self, event: ScheduleEvent) -> StoreResult<()> {
        let Some(slot) = self.doc.events.iter_mut().find(|e| e.id == event.id) else {
            return Ok(());
        };
        *slot = event;
        self.persist()
    }

    pub fn delete_event(&mut self, id: i64) -> StoreResult<()> {
        let before = self.doc.events.len();
        self.doc.events.retain(|event| event.id != id);
        if self.doc.events.len() == before {
            return Ok(());
        }
        self.persist()
    }
}
