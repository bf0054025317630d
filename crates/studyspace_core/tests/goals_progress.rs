use studyspace_core::{SqliteStorage, Store};

fn fresh_store() -> Store<SqliteStorage> {
    let storage = SqliteStorage::open_in_memory().unwrap();
    Store::open(storage).unwrap()
}

fn clear_goals(store: &mut Store<SqliteStorage>) {
    let ids: Vec<i64> = store.daily_goals().iter().map(|g| g.id).collect();
    for id in ids {
        store.delete_daily_goal(id).unwrap();
    }
}

#[test]
fn progress_is_rounded_percent_of_done_goals() {
    let mut store = fresh_store();
    clear_goals(&mut store);

    let first = store.add_daily_goal("one").unwrap();
    store.add_daily_goal("two").unwrap();
    store.add_daily_goal("three").unwrap();
    store.toggle_daily_goal(first).unwrap();

    assert_eq!(store.student_progress(), 33);
}

#[test]
fn progress_is_zero_without_goals() {
    let mut store = fresh_store();
    clear_goals(&mut store);

    assert_eq!(store.student_progress(), 0);
}

#[test]
fn add_toggle_delete_round_trips_to_the_original_state() {
    let mut store = fresh_store();
    let before: Vec<i64> = store.daily_goals().iter().map(|g| g.id).collect();

    let id = store.add_daily_goal("ephemeral").unwrap();
    store.toggle_daily_goal(id).unwrap();
    assert!(store.daily_goals().iter().find(|g| g.id == id).unwrap().done);
    store.delete_daily_goal(id).unwrap();

    let after: Vec<i64> = store.daily_goals().iter().map(|g| g.id).collect();
    assert_eq!(before, after);
}

#[test]
fn toggling_an_unknown_goal_is_a_noop() {
    let mut store = fresh_store();
    let before = store.daily_goals().to_vec();

    store.toggle_daily_goal(i64::MAX).unwrap();
    store.delete_daily_goal(i64::MAX).unwrap();

    assert_eq!(store.daily_goals(), before.as_slice());
}
