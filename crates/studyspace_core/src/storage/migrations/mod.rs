//! Storage schema migrations.
//!
//! # Responsibility
//! - Hold the ordered schema scripts and apply the pending ones
//!   atomically.
//!
//! # Invariants
//! - A script's schema version is its 1-based position in
//!   [`SCHEMA_SCRIPTS`]; appending is the only allowed change.
//! - The applied version is mirrored to `PRAGMA user_version` after
//!   every script.

use crate::storage::{StorageError, StorageResult};
use rusqlite::Connection;

/// Ordered schema scripts. Version `n` is the script at index `n - 1`.
const SCHEMA_SCRIPTS: &[&str] = &[include_str!("0001_init.sql")];

/// Returns the latest schema version known by this binary.
pub fn latest_version() -> u32 {
    SCHEMA_SCRIPTS.len() as u32
}

/// Brings the connection's schema up to [`latest_version`].
///
/// Already-applied scripts are skipped; a database written by a newer
/// binary is rejected rather than partially interpreted.
pub fn apply_migrations(conn: &mut Connection) -> StorageResult<()> {
    let applied = current_user_version(conn)?;
    let latest = latest_version();

    if applied > latest {
        return Err(StorageError::UnsupportedSchemaVersion {
            db_version: applied,
            latest_supported: latest,
        });
    }
    if applied == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (index, script) in SCHEMA_SCRIPTS.iter().enumerate().skip(applied as usize) {
        tx.execute_batch(script)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", index + 1))?;
    }
    tx.commit()?;

    Ok(())
}

fn current_user_version(conn: &Connection) -> StorageResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
