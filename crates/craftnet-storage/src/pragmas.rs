//! SQLite PRAGMA configuration.
//! Must be called on every connection immediately after opening.

use rusqlite::Connection;

use craftnet_core::CraftnetResult;

use crate::to_storage_err;

/// Configure a read-write connection.
///
/// - WAL for concurrent readers during writes
/// - busy_timeout for lock contention
/// - foreign keys so subscriptions follow their user
pub fn configure_connection(conn: &Connection) -> CraftnetResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        PRAGMA busy_timeout = 5000;
        PRAGMA cache_size = -8000;
        PRAGMA temp_store = MEMORY;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Same as `configure_connection` plus `query_only = ON`.
pub fn configure_readonly_connection(conn: &Connection) -> CraftnetResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        PRAGMA busy_timeout = 5000;
        PRAGMA cache_size = -8000;
        PRAGMA temp_store = MEMORY;
        PRAGMA query_only = ON;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
