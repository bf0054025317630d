//! Prayer, daily-sport and achievement operations.
//!
//! # Invariants
//! - `Achievement::unlocked` is monotonic: once true it is never cleared
//!   by any mutator, including the daily reset.
//! - Completing the last open sport unlocks `sport_master`; the unlock is
//!   reported as "just now" exactly once.

use log::info;

use crate::model::document::{Achievement, AchievementId, DailySport, Prayer, PrayerId, SportId};
use crate::storage::StorageBackend;
use crate::store::{Store, StoreResult};

impl<S: StorageBackend> Store<S> {
    pub fn prayers(&self) -> &[Prayer] {
        self.doc.prayers.as_deref().unwrap_or_default()
    }

    /// Flips the `completed` flag of one prayer. Unknown ids are a
    /// silent no-op and do not persist.
    pub fn toggle_prayer(&mut self, id: PrayerId) -> StoreResult<()> {
        let Some(prayer) = self
            .doc
            .prayers
            .as_mut()
            .and_then(|prayers| prayers.iter_mut().find(|p| p.id == id))
        else {
            return Ok(());
        };
        prayer.completed = !prayer.completed;
        self.persist()
    }

    pub fn daily_sports(&self) -> &[DailySport] {
        self.doc.daily_sports.as_deref().unwrap_or_default()
    }

    /// Flips the `completed` flag of one sport, then runs the
    /// achievement check.
    ///
    /// Returns `true` when this call unlocked `sport_master` just now,
    /// so the caller can surface a one-time celebration.
    pub fn toggle_daily_sport(&mut self, id: SportId) -> StoreResult<bool> {
        if let Some(sport) = self
            .doc
            .daily_sports
            .as_mut()
            .and_then(|sports| sports.iter_mut().find(|s| s.id == id))
        {
            sport.completed = !sport.completed;
            self.persist()?;
        }
        self.check_achievements()
    }

    pub fn achievements(&self) -> &[Achievement] {
        self.doc.achievements.as_deref().unwrap_or_default()
    }

    /// Marks an achievement unlocked.
    ///
    /// Returns `true` only when the flag actually transitioned; an
    /// already-unlocked badge is a no-op that does not persist.
    pub fn unlock_achievement(&mut self, id: AchievementId) -> StoreResult<bool> {
        let Some(achievement) = self
            .doc
            .achievements
            .as_mut()
            .and_then(|achievements| achievements.iter_mut().find(|a| a.id == id))
        else {
            return Ok(false);
        };
        if achievement.unlocked {
            return Ok(false);
        }
        achievement.unlocked = true;
        self.persist()?;
        info!("event=achievement_unlocked module=store id={id:?}");
        Ok(true)
    }

    fn check_achievements(&mut self) -> StoreResult<bool> {
        let all_sports_done = self
            .doc
            .daily_sports
            .as_deref()
            .is_some_and(|sports| !sports.is_empty() && sports.iter().all(|s| s.completed));
        if !all_sports_done {
            return Ok(false);
        }
        self.unlock_achievement(AchievementId::SportMaster)
    }
}
