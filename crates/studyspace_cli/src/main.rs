//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `studyspace_core` wiring.
//! - Open (or create) a store and print a dashboard summary.

use std::process::ExitCode;

use studyspace_core::{SqliteStorage, Store};

fn main() -> ExitCode {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "studyspace.db".to_string());

    let storage = match SqliteStorage::open(&path) {
        Ok(storage) => storage,
        Err(err) => {
            eprintln!("failed to open storage at `{path}`: {err}");
            return ExitCode::FAILURE;
        }
    };
    let store = match Store::open(storage) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("failed to open store: {err}");
            return ExitCode::FAILURE;
        }
    };

    let user = store.user();
    println!("studyspace_core version={}", studyspace_core::core_version());
    println!("user={} grade={}", user.name, user.grade);
    println!("streak_days={}", user.stats.streak);
    println!("progress_pct={}", store.student_progress());
    println!(
        "prayers_done={}/{}",
        store.prayers().iter().filter(|p| p.completed).count(),
        store.prayers().len()
    );
    println!(
        "sports_done={}/{}",
        store.daily_sports().iter().filter(|s| s.completed).count(),
        store.daily_sports().len()
    );
    println!("tip={}", store.daily_tip());

    ExitCode::SUCCESS
}
