//! # craftnet-storage
//!
//! SQLite persistence for users and subscriptions.
//! Implements `ISupportStore`. Single write connection + read pool (WAL mode).

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod pragmas;
pub mod queries;
pub mod schema;

pub use engine::StorageEngine;

/// Helper to convert a string message into a CraftnetError::StorageError.
pub fn to_storage_err(msg: String) -> craftnet_core::CraftnetError {
    craftnet_core::CraftnetError::StorageError(craftnet_core::StorageError::SqliteError {
        message: msg,
    })
}
