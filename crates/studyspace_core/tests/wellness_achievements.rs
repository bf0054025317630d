use studyspace_core::{AchievementId, PrayerId, SportId, SqliteStorage, Store};

fn fresh_store() -> Store<SqliteStorage> {
    let storage = SqliteStorage::open_in_memory().unwrap();
    Store::open(storage).unwrap()
}

fn sport_master_unlocked(store: &Store<SqliteStorage>) -> bool {
    store
        .achievements()
        .iter()
        .find(|a| a.id == AchievementId::SportMaster)
        .map(|a| a.unlocked)
        .unwrap()
}

#[test]
fn toggle_prayer_flips_only_the_target() {
    let mut store = fresh_store();

    store.toggle_prayer(PrayerId::Asr).unwrap();

    for prayer in store.prayers() {
        assert_eq!(prayer.completed, prayer.id == PrayerId::Asr);
    }

    store.toggle_prayer(PrayerId::Asr).unwrap();
    assert!(store.prayers().iter().all(|p| !p.completed));
}

#[test]
fn completing_the_last_sport_unlocks_sport_master_exactly_once() {
    let mut store = fresh_store();

    assert!(!store.toggle_daily_sport(SportId::Walk).unwrap());
    assert!(!store.toggle_daily_sport(SportId::Stretch).unwrap());
    assert!(!store.toggle_daily_sport(SportId::Cardio).unwrap());
    assert!(!sport_master_unlocked(&store));

    // the final toggle reports the unlock as "just now"
    assert!(store.toggle_daily_sport(SportId::Breath).unwrap());
    assert!(sport_master_unlocked(&store));

    // re-toggling never reports "just now" again
    assert!(!store.toggle_daily_sport(SportId::Breath).unwrap());
    assert!(!store.toggle_daily_sport(SportId::Breath).unwrap());
    assert!(sport_master_unlocked(&store));
}

#[test]
fn unlock_achievement_is_monotonic() {
    let mut store = fresh_store();

    assert!(store.unlock_achievement(AchievementId::AllPrayers).unwrap());
    assert!(!store.unlock_achievement(AchievementId::AllPrayers).unwrap());

    // seeded as unlocked, so never "just now"
    assert!(!store.unlock_achievement(AchievementId::Streak7).unwrap());
}

#[test]
fn unlock_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("studyspace.db");

    {
        let storage = SqliteStorage::open(&path).unwrap();
        let mut store = Store::open(storage).unwrap();
        for id in [
            SportId::Walk,
            SportId::Stretch,
            SportId::Cardio,
            SportId::Breath,
        ] {
            store.toggle_daily_sport(id).unwrap();
        }
        assert!(sport_master_unlocked(&store));
    }

    let storage = SqliteStorage::open(&path).unwrap();
    let store = Store::open(storage).unwrap();
    assert!(sport_master_unlocked(&store));
}
