//! Persisted document and entity definitions.
//!
//! # Responsibility
//! - Mirror the on-disk document shape one-to-one with serde.
//! - Keep structural absence of migrated collections observable
//!   (`Option<Vec<_>>`) so reconciliation can detect legacy documents.
//!
//! # Invariants
//! - Collections that were never migrated default to empty on load; the
//!   `user` and `settings` singletons default to their canonical seeds.
//! - `last_login_date` defaults to the empty string, which never equals a
//!   real day stamp and therefore forces a daily reset on legacy documents.

use serde::{Deserialize, Serialize};

use crate::model::seed;

/// Root record holding all persisted application state.
///
/// Serialized as one JSON blob under a single storage key; there is no
/// envelope and no schema version field. Schema evolution is detected
/// structurally by the reconciliation steps in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default = "seed::user")]
    pub user: User,
    #[serde(default = "seed::settings")]
    pub settings: Settings,
    /// Day stamp of the last load, at calendar-day granularity.
    #[serde(default)]
    pub last_login_date: String,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub events: Vec<ScheduleEvent>,
    #[serde(default)]
    pub daily_goals: Vec<DailyGoal>,
    #[serde(default)]
    pub recent_files: Vec<StoredFile>,
    #[serde(default)]
    pub notes: Vec<Note>,
    /// `None` means the collection predates the prayers feature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prayers: Option<Vec<Prayer>>,
    /// `None` means the collection predates the daily-sports feature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_sports: Option<Vec<DailySport>>,
    /// `None` means the collection predates the achievements feature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<Achievement>>,
    #[serde(default)]
    pub weekly_progress: Vec<DayProgress>,
    #[serde(default)]
    pub motivation_quotes: Vec<String>,
    #[serde(default)]
    pub tips_pool: Vec<String>,
}

/// Singleton user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub grade: String,
    pub gender: String,
    /// URI or embedded data URL.
    pub avatar: String,
    pub stats: UserStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub streak: u32,
    pub hours_studied: u32,
    pub assignments_done: u32,
}

/// Singleton application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub theme: String,
    pub language: String,
    pub dashboard_layout: String,
    /// Pomodoro session length in minutes.
    pub pomodoro_time: u32,
    pub animations: bool,
    pub font_size: String,
}

/// A school subject. `id` is a stable author-assigned slug used as the
/// join key by [`StoredFile::subject`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    /// Completion percentage, 0..=100.
    pub progress: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Class,
    Study,
    Exam,
    Other,
}

/// One slot on the weekly class schedule.
///
/// Uniqueness of `(day, time)` is a soft convention enforced only by UI
/// placement; the store does not reject overlaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub id: i64,
    /// Weekday name, e.g. `"Monday"`.
    pub day: String,
    /// `"HH:MM"` display time.
    pub time: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyGoal {
    pub id: i64,
    pub text: String,
    pub done: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileCategory {
    Lessons,
    Exercises,
    Exams,
}

/// A bookmarked or uploaded file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    pub id: i64,
    pub name: String,
    /// Display icon kind (`"pdf"`, `"doc"`, ...), free-form on the wire.
    #[serde(rename = "type")]
    pub kind: String,
    /// Human date label, not a timestamp.
    pub date: String,
    /// Owning [`Subject::id`], absent for unfiled entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<FileCategory>,
    pub size: String,
    /// Embedded content as a data URL, when the file body was captured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_url: Option<String>,
    /// Legacy placeholder marker; entries carrying it are purged on load.
    #[serde(default)]
    pub is_mock: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub color: String,
}

/// Closed set of daily prayers, in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrayerId {
    Fajr,
    Sobhe,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prayer {
    pub id: PrayerId,
    /// Display name; canonical names are Arabic.
    pub name: String,
    pub time: String,
    pub completed: bool,
}

/// Closed set of daily sport activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SportId {
    Walk,
    Stretch,
    Cardio,
    Breath,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySport {
    pub id: SportId,
    pub name: String,
    pub duration: String,
    pub icon: String,
    pub completed: bool,
}

/// Closed set of achievement badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    #[serde(rename = "streak_7")]
    Streak7,
    AllPrayers,
    SportMaster,
}

/// Unlock is monotonic: normal mutators never flip `unlocked` back to
/// false, not even the daily reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: AchievementId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub unlocked: bool,
}

/// One entry of the fixed 7-day study-hours summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayProgress {
    pub day: String,
    pub hours: f64,
}

impl Document {
    /// Builds the full default document with every collection populated
    /// from the canonical seed data.
    pub fn seeded(today: impl Into<String>) -> Self {
        Self {
            user: seed::user(),
            settings: seed::settings(),
            last_login_date: today.into(),
            subjects: seed::subjects(),
            events: seed::events(),
            daily_goals: seed::daily_goals(),
            recent_files: Vec::new(),
            notes: seed::notes(),
            prayers: Some(seed::prayers()),
            daily_sports: Some(seed::daily_sports()),
            achievements: Some(seed::achievements()),
            weekly_progress: seed::weekly_progress(),
            motivation_quotes: seed::motivation_quotes(),
            tips_pool: seed::tips_pool(),
        }
    }
}
