//! Core logic for studyspace, a single-user student dashboard.
//! This crate is the single source of truth for the persisted document
//! and its load-time reconciliation rules.

pub mod ids;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;

pub use logging::{init_logging, logging_status};
pub use model::document::{
    Achievement, AchievementId, DailyGoal, DailySport, DayProgress, Document, EventKind,
    FileCategory, Note, Prayer, PrayerId, ScheduleEvent, Settings, SportId, StoredFile, Subject,
    User, UserStats,
};
pub use storage::{SqliteStorage, StorageBackend, StorageError, StorageResult};
pub use store::{
    today_stamp, NewEvent, NewFile, NewNote, SettingsUpdate, Store, StoreError, StoreResult,
    UserUpdate, STORAGE_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
