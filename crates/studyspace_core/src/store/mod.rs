//! Document store: single source of truth for all persisted state.
//!
//! # Responsibility
//! - Load, reconcile and default the document once at construction.
//! - Expose typed accessors and read-modify-persist mutators to callers.
//!
//! # Invariants
//! - After construction no collection is structurally absent; accessors
//!   degrade to empty slices instead of failing.
//! - Every effective mutation persists the whole document before
//!   returning; there are no partial or deferred writes.
//! - A malformed or missing persisted blob is treated as first run and
//!   never surfaced as an error.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

use chrono::Local;
use log::{error, info, warn};

use crate::model::document::{Document, Settings, Subject, User, UserStats};
use crate::storage::{StorageBackend, StorageError};

mod files;
mod goals;
mod insights;
mod notes;
mod reconcile;
mod schedule;
mod wellness;

pub use files::NewFile;
pub use notes::NewNote;
pub use schedule::NewEvent;

/// Fixed storage key the document is persisted under.
pub const STORAGE_KEY: &str = "studySpaceData";

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by store mutations.
///
/// Only persistence problems reach callers; load-time decode problems are
/// recovered by falling back to the seeded document.
#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode document: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Returns today's day stamp at calendar-day granularity, in the
/// viewer's local timezone.
///
/// The `"%a %b %d %Y"` shape matches the stamps written by earlier
/// releases, so documents they persisted compare equal on the same day.
pub fn today_stamp() -> String {
    Local::now().format("%a %b %d %Y").to_string()
}

/// Partial update for the user singleton; `None` fields are left as-is.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub grade: Option<String>,
    pub gender: Option<String>,
    pub avatar: Option<String>,
    pub stats: Option<UserStats>,
}

/// Partial update for settings; `None` fields are left as-is.
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub theme: Option<String>,
    pub language: Option<String>,
    pub dashboard_layout: Option<String>,
    pub pomodoro_time: Option<u32>,
    pub animations: Option<bool>,
    pub font_size: Option<String>,
}

/// Owner of the in-memory document and its storage backend.
pub struct Store<S: StorageBackend> {
    backend: S,
    doc: Document,
}

impl<S: StorageBackend> Store<S> {
    /// Loads, reconciles and persists the document from `backend`.
    ///
    /// # Contract
    /// - An absent or unreadable blob yields the full seeded document.
    /// - A present blob is repaired by the ordered reconciliation steps;
    ///   replaying them against a current document changes nothing.
    /// - Storage always reflects the reconciled in-memory state when
    ///   this returns `Ok`.
    pub fn open(backend: S) -> StoreResult<Self> {
        let started_at = Instant::now();
        info!("event=store_open module=store status=start");

        let today = today_stamp();
        let raw = match backend.read(STORAGE_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                // Treated the same as an absent document: the session
                // still has to come up with usable defaults.
                warn!(
                    "event=store_load module=store status=error error_code=read_failed error={}",
                    err
                );
                None
            }
        };

        let (doc, outcome) = match raw {
            Some(text) => match serde_json::from_str::<Document>(&text) {
                Ok(mut doc) => {
                    let report = reconcile::reconcile(&mut doc, &today);
                    (doc, format!("loaded {report}"))
                }
                Err(err) => {
                    warn!(
                        "event=store_load module=store status=error error_code=decode_failed error={}",
                        err
                    );
                    (Document::seeded(&today), "seeded_after_decode_error".to_string())
                }
            },
            None => (Document::seeded(&today), "seeded".to_string()),
        };

        let mut store = Self { backend, doc };
        store.persist()?;

        info!(
            "event=store_open module=store status=ok outcome=\"{}\" duration_ms={}",
            outcome,
            started_at.elapsed().as_millis()
        );
        Ok(store)
    }

    /// Serializes the whole document and writes it through to storage.
    ///
    /// On failure the in-memory mutation is kept and the error is
    /// returned so the caller can warn that changes may not survive a
    /// reload.
    fn persist(&mut self) -> StoreResult<()> {
        let text = serde_json::to_string(&self.doc)?;
        if let Err(err) = self.backend.write(STORAGE_KEY, &text) {
            error!(
                "event=store_persist module=store status=error error_code=write_failed error={}",
                err
            );
            return Err(err.into());
        }
        Ok(())
    }

    /// Read-only view of the whole document.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn user(&self) -> &User {
        &self.doc.user
    }

    pub fn update_user(&mut self, update: UserUpdate) -> StoreResult<()> {
        let user = &mut self.doc.user;
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(grade) = update.grade {
            user.grade = grade;
        }
        if let Some(gender) = update.gender {
            user.gender = gender;
        }
        if let Some(avatar) = update.avatar {
            user.avatar = avatar;
        }
        if let Some(stats) = update.stats {
            user.stats = stats;
        }
        self.persist()
    }

    pub fn settings(&self) -> &Settings {
        &self.doc.settings
    }

    pub fn update_settings(&mut self, update: SettingsUpdate) -> StoreResult<()> {
        let settings = &mut self.doc.settings;
        if let Some(theme) = update.theme {
            settings.theme = theme;
        }
        if let Some(language) = update.language {
            settings.language = language;
        }
        if let Some(layout) = update.dashboard_layout {
            settings.dashboard_layout = layout;
        }
        if let Some(minutes) = update.pomodoro_time {
            settings.pomodoro_time = minutes;
        }
        if let Some(animations) = update.animations {
            settings.animations = animations;
        }
        if let Some(font_size) = update.font_size {
            settings.font_size = font_size;
        }
        self.persist()
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.doc.subjects
    }

    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.doc.subjects.iter().find(|subject| subject.id == id)
    }
}
