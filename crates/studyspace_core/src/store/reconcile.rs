//! Load-time reconciliation of previously persisted documents.
//!
//! # Responsibility
//! - Repair, default and migrate a loaded document to the current shape.
//!
//! # Invariants
//! - Steps run in a fixed order: prayer existence, legacy-name rewrite,
//!   `sobhe` positional insert, daily reset, sports existence, mock-file
//!   purge, achievements existence. Later steps rely on earlier ones
//!   having made their collections structurally complete.
//! - Every step is idempotent; replaying the whole sequence against an
//!   already-current document is a no-op.
//! - Reconciliation never touches `Achievement::unlocked` on existing
//!   entries: badges are permanent.

use std::fmt::{Display, Formatter};

use crate::model::document::{Document, PrayerId};
use crate::model::seed;

/// Summary of what reconciliation changed, for the `store_open` log line.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ReconcileReport {
    pub steps_applied: u32,
    pub daily_reset: bool,
}

impl Display for ReconcileReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "steps_applied={} daily_reset={}",
            self.steps_applied, self.daily_reset
        )
    }
}

/// Applies the ordered reconciliation steps to `doc`.
///
/// The caller persists once afterwards; individual steps only mutate the
/// in-memory document.
pub(crate) fn reconcile(doc: &mut Document, today: &str) -> ReconcileReport {
    let mut report = ReconcileReport::default();

    let steps: [fn(&mut Document) -> bool; 3] = [
        ensure_prayers,
        rewrite_legacy_prayer_names,
        insert_missing_sobhe,
    ];
    for step in steps {
        if step(doc) {
            report.steps_applied += 1;
        }
    }

    if apply_daily_reset(doc, today) {
        report.steps_applied += 1;
        report.daily_reset = true;
    }

    let tail: [fn(&mut Document) -> bool; 3] =
        [ensure_daily_sports, purge_mock_files, ensure_achievements];
    for step in tail {
        if step(doc) {
            report.steps_applied += 1;
        }
    }

    report
}

/// Installs the canonical prayer list when the collection is absent.
fn ensure_prayers(doc: &mut Document) -> bool {
    if doc.prayers.is_some() {
        return false;
    }
    doc.prayers = Some(seed::prayers());
    true
}

/// Rewrites prayer display names to the canonical Arabic set.
///
/// Legacy documents are detected by the first member still carrying the
/// English-era literal. `time` and `completed` are left untouched.
fn rewrite_legacy_prayer_names(doc: &mut Document) -> bool {
    let Some(prayers) = doc.prayers.as_mut() else {
        return false;
    };
    let is_legacy = prayers
        .first()
        .is_some_and(|prayer| prayer.name == seed::LEGACY_FIRST_PRAYER_NAME);
    if !is_legacy {
        return false;
    }

    for prayer in prayers.iter_mut() {
        if let Some(name) = seed::canonical_prayer_name(prayer.id) {
            prayer.name = name.to_string();
        }
    }
    true
}

/// Inserts the `sobhe` member immediately after `fajr` when an otherwise
/// present prayer collection is missing it.
fn insert_missing_sobhe(doc: &mut Document) -> bool {
    let Some(prayers) = doc.prayers.as_mut() else {
        return false;
    };
    if prayers.iter().any(|prayer| prayer.id == PrayerId::Sobhe) {
        return false;
    }

    let position = prayers
        .iter()
        .position(|prayer| prayer.id == PrayerId::Fajr)
        .map_or(0, |index| index + 1);
    prayers.insert(position, seed::sobhe_prayer());
    true
}

/// Clears all prayer and sport completion flags the first time the
/// document is loaded on a new calendar day, then stamps today.
fn apply_daily_reset(doc: &mut Document, today: &str) -> bool {
    if doc.last_login_date == today {
        return false;
    }

    if let Some(prayers) = doc.prayers.as_mut() {
        for prayer in prayers {
            prayer.completed = false;
        }
    }
    if let Some(sports) = doc.daily_sports.as_mut() {
        for sport in sports {
            sport.completed = false;
        }
    }
    doc.last_login_date = today.to_string();
    true
}

/// Installs the canonical sport list when the collection is absent.
fn ensure_daily_sports(doc: &mut Document) -> bool {
    if doc.daily_sports.is_some() {
        return false;
    }
    doc.daily_sports = Some(seed::daily_sports());
    true
}

/// Drops seeded placeholder files left over from pre-release documents.
///
/// Deliberately time-limited: once no surviving document carries the
/// flag, this step is dead code and can be removed.
fn purge_mock_files(doc: &mut Document) -> bool {
    if !doc.recent_files.iter().any(|file| file.is_mock) {
        return false;
    }
    doc.recent_files.retain(|file| !file.is_mock);
    true
}

/// Installs the canonical achievement list when the collection is absent.
fn ensure_achievements(doc: &mut Document) -> bool {
    if doc.achievements.is_some() {
        return false;
    }
    doc.achievements = Some(seed::achievements());
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::document::Document;

    fn current_document() -> Document {
        Document::seeded("Sat Aug 30 2026")
    }

    #[test]
    fn reconcile_is_a_noop_on_a_current_document() {
        let mut doc = current_document();
        let pristine = doc.clone();

        let report = reconcile(&mut doc, "Sat Aug 30 2026");

        assert_eq!(report.steps_applied, 0);
        assert!(!report.daily_reset);
        assert_eq!(doc, pristine);
    }

    #[test]
    fn reconcile_is_idempotent_across_replays() {
        let mut doc = current_document();
        doc.prayers = None;
        doc.daily_sports = None;
        doc.achievements = None;
        doc.last_login_date.clear();

        let first = reconcile(&mut doc, "Sat Aug 30 2026");
        assert!(first.steps_applied > 0);
        let settled = doc.clone();

        let second = reconcile(&mut doc, "Sat Aug 30 2026");
        assert_eq!(second.steps_applied, 0);
        assert_eq!(doc, settled);
    }

    #[test]
    fn sobhe_is_inserted_right_after_fajr() {
        let mut doc = current_document();
        if let Some(prayers) = doc.prayers.as_mut() {
            prayers.retain(|prayer| prayer.id != PrayerId::Sobhe);
        }

        reconcile(&mut doc, "Sat Aug 30 2026");

        let prayers = doc.prayers.as_deref().unwrap_or_default();
        assert_eq!(prayers.len(), 6);
        assert_eq!(prayers[0].id, PrayerId::Fajr);
        assert_eq!(prayers[1].id, PrayerId::Sobhe);
    }
}
