//! ConnectionPool: writer + read pool with round-robin selection.
//!
//! The only place in the crate that holds `Mutex<Connection>`.
//! All other code reaches storage through `StorageEngine`.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rusqlite::{Connection, OpenFlags};

use craftnet_core::{CraftnetError, CraftnetResult, StorageError};

use crate::pragmas;

/// Default number of reader connections.
const DEFAULT_READ_POOL_SIZE: usize = 2;

/// Connection pool: 1 writer + N readers, WAL on all connections.
pub struct ConnectionPool {
    writer: Mutex<Connection>,
    readers: Vec<Mutex<Connection>>,
    read_index: AtomicUsize,
}

fn open_failed(path: &Path, e: rusqlite::Error) -> CraftnetError {
    CraftnetError::StorageError(StorageError::OpenFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn poisoned(role: &str, e: impl std::fmt::Display) -> CraftnetError {
    CraftnetError::StorageError(StorageError::LockPoisoned(format!("{role}: {e}")))
}

impl ConnectionPool {
    /// Open a file-backed pool. A `read_pool_size` of 0 uses the default.
    ///
    /// Readers are opened after the writer has configured WAL, so the
    /// database file exists by the time they connect.
    pub fn open(path: &Path, read_pool_size: usize) -> CraftnetResult<Self> {
        let pool_size = if read_pool_size == 0 { DEFAULT_READ_POOL_SIZE } else { read_pool_size };

        let writer = Connection::open(path).map_err(|e| open_failed(path, e))?;
        pragmas::configure_connection(&writer)?;

        let mut readers = Vec::with_capacity(pool_size);
        for _ in 0..pool_size {
            let reader = Connection::open_with_flags(
                path,
                OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )
            .map_err(|e| open_failed(path, e))?;
            pragmas::configure_readonly_connection(&reader)?;
            readers.push(Mutex::new(reader));
        }

        Ok(Self {
            writer: Mutex::new(writer),
            readers,
            read_index: AtomicUsize::new(0),
        })
    }

    /// Open an in-memory pool. Reads go through the writer since separate
    /// in-memory connections do not share a database.
    pub fn open_in_memory() -> CraftnetResult<Self> {
        let writer = Connection::open_in_memory()
            .map_err(|e| open_failed(Path::new(":memory:"), e))?;
        pragmas::configure_connection(&writer)?;

        Ok(Self {
            writer: Mutex::new(writer),
            readers: Vec::new(),
            read_index: AtomicUsize::new(0),
        })
    }

    /// Execute a closure with the writer connection.
    pub fn with_writer<F, T>(&self, f: F) -> CraftnetResult<T>
    where
        F: FnOnce(&Connection) -> CraftnetResult<T>,
    {
        let conn = self.writer.lock().map_err(|e| poisoned("writer", e))?;
        f(&conn)
    }

    /// Execute a closure with a reader connection (round-robin).
    ///
    /// Falls back to the writer if there are no readers (in-memory mode).
    pub fn with_reader<F, T>(&self, f: F) -> CraftnetResult<T>
    where
        F: FnOnce(&Connection) -> CraftnetResult<T>,
    {
        if self.readers.is_empty() {
            return self.with_writer(f);
        }

        let index = self.read_index.fetch_add(1, Ordering::Relaxed) % self.readers.len();
        let conn = self.readers[index].lock().map_err(|e| poisoned("reader", e))?;
        f(&conn)
    }

    /// Number of dedicated reader connections.
    pub fn reader_count(&self) -> usize {
        self.readers.len()
    }

    /// Check WAL mode on the writer connection.
    pub fn is_wal_mode(&self) -> CraftnetResult<bool> {
        self.with_writer(|conn| {
            let mode: String = conn
                .query_row("PRAGMA journal_mode", [], |row| row.get(0))
                .map_err(|e| crate::to_storage_err(e.to_string()))?;
            Ok(mode.eq_ignore_ascii_case("wal"))
        })
    }
}
