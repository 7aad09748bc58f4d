//! Schema versioning.
//!
//! - Version lives in a dedicated single-row `schema_version` table
//! - Each version bump is a const SQL string in schema.rs

use rusqlite::Connection;
use tracing::info;

use craftnet_core::{CraftnetError, CraftnetResult, StorageError};

use crate::schema::SCHEMA_V1;
use crate::to_storage_err;

/// Current schema version. Bump this when adding new migrations.
pub const CURRENT_VERSION: u32 = 1;

/// Get the current schema version. A fresh database reports 0.
pub fn get_schema_version(conn: &Connection) -> CraftnetResult<u32> {
    let exists: bool = conn
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='schema_version'",
            [],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    if !exists {
        return Ok(0);
    }

    match conn.query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
        row.get::<_, u32>(0)
    }) {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(e) => Err(to_storage_err(e.to_string())),
    }
}

fn set_schema_version(conn: &Connection, version: u32) -> CraftnetResult<()> {
    conn.execute_batch("CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL) STRICT;")
        .map_err(|e| to_storage_err(e.to_string()))?;
    conn.execute("DELETE FROM schema_version", [])
        .map_err(|e| to_storage_err(e.to_string()))?;
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        rusqlite::params![version],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

fn migration_failed(version: u32, e: rusqlite::Error) -> CraftnetError {
    CraftnetError::StorageError(StorageError::MigrationFailed {
        version,
        message: e.to_string(),
    })
}

/// Run all pending migrations. Returns the version the database was migrated to.
pub fn migrate(conn: &Connection) -> CraftnetResult<u32> {
    let current = get_schema_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(current);
    }

    if current < 1 {
        info!("Migrating schema: 0 → 1 (users, subscriptions)");
        conn.execute_batch(SCHEMA_V1)
            .map_err(|e| migration_failed(1, e))?;
        set_schema_version(conn, 1)?;
    }

    let final_version = get_schema_version(conn)?;
    info!(from = current, to = final_version, "Schema migration complete");
    Ok(final_version)
}
