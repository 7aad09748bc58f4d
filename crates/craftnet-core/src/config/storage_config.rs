//! Storage subsystem configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the SQLite user/subscription store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file. `None` opens an in-memory database.
    pub db_path: Option<String>,
    /// Number of read-only connections in the pool.
    pub read_pool_size: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            read_pool_size: 2,
        }
    }
}
