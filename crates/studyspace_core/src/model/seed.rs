//! Canonical seed data.
//!
//! # Responsibility
//! - Provide the compiled-in defaults for every entity collection.
//! - Provide the canonical prayer names used by the legacy-name rewrite.
//!
//! # Invariants
//! - Seed prayers appear in canonical display order with `sobhe`
//!   immediately after `fajr`.
//! - Seed data is the only source for collections installed by the
//!   structural migrations; migrations never invent entities inline.

use crate::model::document::{
    Achievement, AchievementId, DailyGoal, DailySport, DayProgress, EventKind, Note, Prayer,
    PrayerId, ScheduleEvent, Settings, SportId, Subject, User, UserStats,
};

/// First-prayer display name used by pre-Arabic-naming documents. The
/// legacy-name rewrite keys off this literal; see the store reconcile
/// steps.
pub const LEGACY_FIRST_PRAYER_NAME: &str = "Fajr";

pub fn user() -> User {
    User {
        name: "Student".to_string(),
        grade: "1st Baccalaureate".to_string(),
        gender: "male".to_string(),
        avatar: "https://api.dicebear.com/7.x/notionists/svg?seed=Felix".to_string(),
        stats: UserStats {
            streak: 12,
            hours_studied: 45,
            assignments_done: 28,
        },
    }
}

pub fn settings() -> Settings {
    Settings {
        theme: "light".to_string(),
        language: "en".to_string(),
        dashboard_layout: "normal".to_string(),
        pomodoro_time: 25,
        animations: true,
        font_size: "medium".to_string(),
    }
}

pub fn subjects() -> Vec<Subject> {
    [
        ("math", "Mathematics", "function", "#e17055", 78),
        ("pc", "Physics & Chemistry", "atom", "#0984e3", 65),
        ("svt", "Life & Earth Sciences", "dna", "#00b894", 42),
        ("eng", "English", "chat-circle-text", "#fdcb6e", 85),
        ("phi", "Philosophy", "brain", "#6c5ce7", 30),
        ("ei", "Islamic Education", "book-open-text", "#2d3436", 90),
        ("ar", "Arabic", "pen-nib", "#d63031", 50),
        ("hg", "History & Geography", "globe-hemisphere-west", "#e84393", 60),
    ]
    .into_iter()
    .map(|(id, name, icon, color, progress)| Subject {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
        progress,
    })
    .collect()
}

pub fn events() -> Vec<ScheduleEvent> {
    [
        (1, "Monday", "09:00", "Mathematics", EventKind::Class, "#ff7675"),
        (2, "Monday", "11:00", "Physics", EventKind::Class, "#74b9ff"),
        (3, "Tuesday", "10:00", "English", EventKind::Class, "#fd79a8"),
        (4, "Wednesday", "14:00", "Study Math", EventKind::Study, "#55efc4"),
        (5, "Friday", "09:00", "Islamic Edu", EventKind::Class, "#00b894"),
    ]
    .into_iter()
    .map(|(id, day, time, title, kind, color)| ScheduleEvent {
        id,
        day: day.to_string(),
        time: time.to_string(),
        title: title.to_string(),
        kind,
        color: color.to_string(),
    })
    .collect()
}

pub fn daily_goals() -> Vec<DailyGoal> {
    vec![
        DailyGoal {
            id: 1,
            text: "Review Math Chapter 4".to_string(),
            done: false,
        },
        DailyGoal {
            id: 2,
            text: "Complete French Essay".to_string(),
            done: true,
        },
        DailyGoal {
            id: 3,
            text: "Read 20 pages of History".to_string(),
            done: false,
        },
    ]
}

pub fn notes() -> Vec<Note> {
    [
        (1, "Math Formulas", "Remember quadratic formula...", "#ffeaa7"),
        (2, "French Verbs", "Subjonctif endings: -e, -es, -e...", "#fab1a0"),
        (3, "Physics Project", "Buy materials for the circuit.", "#74b9ff"),
    ]
    .into_iter()
    .map(|(id, title, content, color)| Note {
        id,
        title: title.to_string(),
        content: content.to_string(),
        color: color.to_string(),
    })
    .collect()
}

/// Canonical Arabic display name for a prayer.
///
/// Returns `None` for `sobhe`, which was introduced after the
/// English-name era and keeps whatever name the document carries.
pub fn canonical_prayer_name(id: PrayerId) -> Option<&'static str> {
    match id {
        PrayerId::Fajr => Some("الفجر"),
        PrayerId::Sobhe => None,
        PrayerId::Dhuhr => Some("الظهر"),
        PrayerId::Asr => Some("العصر"),
        PrayerId::Maghrib => Some("المغرب"),
        PrayerId::Isha => Some("العشاء"),
    }
}

pub fn prayers() -> Vec<Prayer> {
    [
        (PrayerId::Fajr, "الفجر", "05:30"),
        (PrayerId::Sobhe, "الصبح", "8:32 am"),
        (PrayerId::Dhuhr, "الظهر", "12:30"),
        (PrayerId::Asr, "العصر", "15:45"),
        (PrayerId::Maghrib, "المغرب", "18:15"),
        (PrayerId::Isha, "العشاء", "19:45"),
    ]
    .into_iter()
    .map(|(id, name, time)| Prayer {
        id,
        name: name.to_string(),
        time: time.to_string(),
        completed: false,
    })
    .collect()
}

/// The `sobhe` member installed by the positional-insert migration.
pub fn sobhe_prayer() -> Prayer {
    Prayer {
        id: PrayerId::Sobhe,
        name: "الصبح".to_string(),
        time: "8:32 am".to_string(),
        completed: false,
    }
}

pub fn daily_sports() -> Vec<DailySport> {
    [
        (SportId::Walk, "المشي", "30 دقيقة", "sneaker-move"),
        (SportId::Stretch, "تمارين التمدد", "15 دقيقة", "person-simple-throw"),
        (SportId::Cardio, "تمارين خفيفة", "20 دقيقة", "heartbeat"),
        (SportId::Breath, "تمارين التنفس", "10 دقائق", "wind"),
    ]
    .into_iter()
    .map(|(id, name, duration, icon)| DailySport {
        id,
        name: name.to_string(),
        duration: duration.to_string(),
        icon: icon.to_string(),
        completed: false,
    })
    .collect()
}

pub fn achievements() -> Vec<Achievement> {
    [
        (
            AchievementId::Streak7,
            "7 Day Streak",
            "Study for 7 days in a row",
            "fire",
            true,
        ),
        (
            AchievementId::AllPrayers,
            "Faithful",
            "Complete all 5 prayers in a day",
            "hands-praying",
            false,
        ),
        (
            AchievementId::SportMaster,
            "Active Body",
            "Complete all daily sports",
            "sneaker-move",
            false,
        ),
    ]
    .into_iter()
    .map(|(id, title, description, icon, unlocked)| Achievement {
        id,
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        unlocked,
    })
    .collect()
}

pub fn weekly_progress() -> Vec<DayProgress> {
    [
        ("Mon", 4.0),
        ("Tue", 2.5),
        ("Wed", 5.0),
        ("Thu", 3.0),
        ("Fri", 0.0),
        ("Sat", 0.0),
        ("Sun", 0.0),
    ]
    .into_iter()
    .map(|(day, hours)| DayProgress {
        day: day.to_string(),
        hours,
    })
    .collect()
}

pub fn motivation_quotes() -> Vec<String> {
    [
        "Believe you can and you're halfway there.",
        "Success is the sum of small efforts, repeated day in and day out.",
        "The future depends on what you do today.",
        "Don't watch the clock; do what it does. Keep going.",
        "Your limitation—it's only your imagination.",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

pub fn tips_pool() -> Vec<String> {
    [
        "Work for 25 minutes, then take a 5 minute break. After 4 cycles, take a longer break.",
        "Don't just re-read. Test yourself. Close the book and try to recite what you learned.",
        "Review material at increasing intervals (1 day, 3 days, 1 week) to combat forgetting.",
        "Explain the topic out loud as if teaching someone else.",
        "Start with the hardest subject while your energy is highest.",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
