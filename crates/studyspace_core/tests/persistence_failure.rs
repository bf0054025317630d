use std::collections::HashMap;

use studyspace_core::{
    PrayerId, StorageBackend, StorageResult, Store, StoreError,
};

/// In-memory backend that rejects writes once its budget is spent,
/// standing in for a storage facility hitting its quota.
struct QuotaLimitedStorage {
    entries: HashMap<String, String>,
    writes_left: usize,
}

impl QuotaLimitedStorage {
    fn with_write_budget(writes_left: usize) -> Self {
        Self {
            entries: HashMap::new(),
            writes_left,
        }
    }
}

impl StorageBackend for QuotaLimitedStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> StorageResult<()> {
        if self.writes_left == 0 {
            return Err(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_FULL),
                Some("database or disk is full".to_string()),
            )
            .into());
        }
        self.writes_left -= 1;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[test]
fn rejected_write_surfaces_an_error_but_keeps_the_mutation_in_memory() {
    // budget of 1 covers the persist at construction; every later write fails
    let mut store = Store::open(QuotaLimitedStorage::with_write_budget(1)).unwrap();

    let err = store.toggle_prayer(PrayerId::Fajr).unwrap_err();
    assert!(matches!(err, StoreError::Storage(_)));

    // the flag flipped before the write was attempted
    let fajr = store
        .prayers()
        .iter()
        .find(|p| p.id == PrayerId::Fajr)
        .unwrap();
    assert!(fajr.completed);
}

#[test]
fn session_stays_usable_after_a_persistence_failure() {
    let mut store = Store::open(QuotaLimitedStorage::with_write_budget(1)).unwrap();

    assert!(store.add_daily_goal("finish revision sheet").is_err());

    // reads and further in-memory mutations keep working
    assert_eq!(store.subjects().len(), 8);
    assert!(store.random_quote().is_some());
    assert!(store
        .daily_goals()
        .iter()
        .any(|goal| goal.text == "finish revision sheet"));

    assert!(store.toggle_prayer(PrayerId::Isha).is_err());
    assert!(store
        .prayers()
        .iter()
        .find(|p| p.id == PrayerId::Isha)
        .unwrap()
        .completed);
}

#[test]
fn construction_fails_when_the_initial_persist_is_rejected() {
    // construction always writes the reconciled document back
    assert!(Store::open(QuotaLimitedStorage::with_write_budget(0)).is_err());
}
