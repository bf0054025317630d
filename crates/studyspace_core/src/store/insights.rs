//! Read-only dashboard insights: weekly summary, quotes, tips, progress.

use chrono::{Datelike, Local};
use rand::seq::SliceRandom;

use crate::model::document::DayProgress;
use crate::storage::StorageBackend;
use crate::store::Store;

/// Tip shown when the pool is empty.
const FALLBACK_TIP: &str = "Stay focused!";

impl<S: StorageBackend> Store<S> {
    pub fn weekly_progress(&self) -> &[DayProgress] {
        &self.doc.weekly_progress
    }

    /// Picks a motivation quote uniformly at random; may repeat across
    /// calls. `None` only when the pool is empty.
    pub fn random_quote(&self) -> Option<&str> {
        self.doc
            .motivation_quotes
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
    }

    /// Picks today's tip deterministically by day-of-month modulo pool
    /// size: the same tip all day, changing when the date does.
    pub fn daily_tip(&self) -> &str {
        let tips = &self.doc.tips_pool;
        if tips.is_empty() {
            return FALLBACK_TIP;
        }
        let day = Local::now().day() as usize;
        &tips[day % tips.len()]
    }

    /// Percentage of daily goals marked done, rounded to the nearest
    /// integer. Zero when there are no goals.
    pub fn student_progress(&self) -> u8 {
        let goals = &self.doc.daily_goals;
        if goals.is_empty() {
            return 0;
        }
        let done = goals.iter().filter(|goal| goal.done).count();
        ((done as f64 / goals.len() as f64) * 100.0).round() as u8
    }
}
