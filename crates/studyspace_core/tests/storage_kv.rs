use rusqlite::Connection;
use studyspace_core::storage::migrations::latest_version;
use studyspace_core::{SqliteStorage, StorageBackend, StorageError};

#[test]
fn open_applies_migrations_and_mirrors_user_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kv.db");

    {
        SqliteStorage::open(&path).unwrap();
    }

    let conn = Connection::open(&path).unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn reopen_is_a_noop_when_already_current() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kv.db");

    let mut storage = SqliteStorage::open(&path).unwrap();
    storage.write("k", "v1").unwrap();
    drop(storage);

    let storage = SqliteStorage::open(&path).unwrap();
    assert_eq!(storage.read("k").unwrap().as_deref(), Some("v1"));
}

#[test]
fn read_of_a_missing_key_returns_none() {
    let storage = SqliteStorage::open_in_memory().unwrap();
    assert!(storage.read("absent").unwrap().is_none());
}

#[test]
fn write_replaces_the_previous_blob() {
    let mut storage = SqliteStorage::open_in_memory().unwrap();
    storage.write("k", "v1").unwrap();
    storage.write("k", "v2").unwrap();
    assert_eq!(storage.read("k").unwrap().as_deref(), Some("v2"));
}

#[test]
fn newer_schema_versions_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kv.db");

    {
        SqliteStorage::open(&path).unwrap();
    }
    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version() + 1))
            .unwrap();
    }

    let err = match SqliteStorage::open(&path) {
        Err(err) => err,
        Ok(_) => panic!("opening a newer schema must fail"),
    };
    match err {
        StorageError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, latest_version() + 1);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}
