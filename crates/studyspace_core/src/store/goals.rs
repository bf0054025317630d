//! Daily goal operations.

use crate::ids;
use crate::model::document::DailyGoal;
use crate::storage::StorageBackend;
use crate::store::{Store, StoreResult};

impl<S: StorageBackend> Store<S> {
    pub fn daily_goals(&self) -> &[DailyGoal] {
        &self.doc.daily_goals
    }

    /// Appends a new, not-yet-done goal and returns its assigned id.
    pub fn add_daily_goal(&mut self, text: impl Into<String>) -> StoreResult<i64> {
        let id = ids::next_id();
        self.doc.daily_goals.push(DailyGoal {
            id,
            text: text.into(),
            done: false,
        });
        self.persist()?;
        Ok(id)
    }

    /// Flips the `done` flag of the goal with `id`. Unknown ids are a
    /// silent no-op and do not persist.
    pub fn toggle_daily_goal(&mut self, id: i64) -> StoreResult<()> {
        let Some(goal) = self.doc.daily_goals.iter_mut().find(|g| g.id == id) else {
            return Ok(());
        };
        goal.done = !goal.done;
        self.persist()
    }

    pub fn delete_daily_goal(&mut self, id: i64) -> StoreResult<()> {
        let before = self.doc.daily_goals.len();
        self.doc.daily_goals.retain(|goal| goal.id != id);
        if self.doc.daily_goals.len() == before {
            return Ok(());
        }
        self.persist()
    }
}
