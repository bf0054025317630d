//! Timestamp-seeded identifier generation.
//!
//! # Responsibility
//! - Produce unique `i64` identifiers for user-created records.
//!
//! # Invariants
//! - Ids are strictly increasing within one process, so two records
//!   created in the same millisecond never collide.
//! - Ids stay in the epoch-milliseconds range, interoperable with ids
//!   already persisted by earlier releases.

use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Returns the next identifier: the current epoch milliseconds, bumped
/// past the previously issued id when the clock has not advanced.
pub fn next_id() -> i64 {
    let now = chrono::Utc::now().timestamp_millis();
    let mut prev = LAST_ID.load(Ordering::Relaxed);
    loop {
        let candidate = if now > prev { now } else { prev + 1 };
        match LAST_ID.compare_exchange_weak(prev, candidate, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return candidate,
            Err(actual) => prev = actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::next_id;

    #[test]
    fn ids_are_strictly_increasing() {
        let mut previous = next_id();
        for _ in 0..1_000 {
            let id = next_id();
            assert!(id > previous);
            previous = id;
        }
    }

    #[test]
    fn ids_track_the_wall_clock() {
        let before = chrono::Utc::now().timestamp_millis();
        let id = next_id();
        assert!(id >= before);
    }
}
