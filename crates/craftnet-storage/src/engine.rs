//! StorageEngine: concrete `ISupportStore` implementation wrapping `ConnectionPool`.
//!
//! Each trait method delegates to the free functions in `queries/`,
//! routed through the pool (reads on a reader, writes on the writer).

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::info;

use craftnet_core::config::StorageConfig;
use craftnet_core::{
    CraftnetError, CraftnetResult, ISupportStore, StorageError, SubscriptionRecord, SupportPlan,
    UserRecord,
};

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{subscription_ops, user_ops};

/// SQLite-backed user/subscription store.
pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open a file-backed engine, creating parent directories and running migrations.
    pub fn open(path: &Path, read_pool_size: usize) -> CraftnetResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                CraftnetError::StorageError(StorageError::OpenFailed {
                    path: parent.display().to_string(),
                    message: e.to_string(),
                })
            })?;
        }
        let pool = ConnectionPool::open(path, read_pool_size)?;
        pool.with_writer(|conn| migrations::migrate(conn).map(|_| ()))?;
        info!(path = %path.display(), readers = pool.reader_count(), "Storage opened");
        Ok(Self { pool })
    }

    /// Open an in-memory engine (for testing).
    pub fn open_in_memory() -> CraftnetResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        pool.with_writer(|conn| migrations::migrate(conn).map(|_| ()))?;
        Ok(Self { pool })
    }

    /// Open per `StorageConfig`: file-backed when `db_path` is set, in-memory otherwise.
    pub fn from_config(config: &StorageConfig) -> CraftnetResult<Self> {
        match config.db_path.as_deref() {
            Some(path) => Self::open(Path::new(path), config.read_pool_size),
            None => Self::open_in_memory(),
        }
    }

    /// Execute a closure with the writer connection (tests and administration).
    pub fn with_writer<F, T>(&self, f: F) -> CraftnetResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> CraftnetResult<T>,
    {
        self.pool.with_writer(f)
    }

    /// Execute a closure with a reader connection.
    pub fn with_reader<F, T>(&self, f: F) -> CraftnetResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> CraftnetResult<T>,
    {
        self.pool.with_reader(f)
    }

    /// Look a user up by id.
    pub fn find_user_by_id(&self, id: i64) -> CraftnetResult<Option<UserRecord>> {
        self.pool.with_reader(|conn| user_ops::find_by_id(conn, id))
    }

    pub fn is_wal_mode(&self) -> CraftnetResult<bool> {
        self.pool.is_wal_mode()
    }
}

impl ISupportStore for StorageEngine {
    fn find_user_by_email(&self, email: &str) -> CraftnetResult<Option<UserRecord>> {
        self.pool.with_reader(|conn| user_ops::find_by_email(conn, email))
    }

    fn has_active_subscription(&self, user_id: i64, plan: SupportPlan) -> CraftnetResult<bool> {
        self.pool
            .with_reader(|conn| subscription_ops::exists_active(conn, user_id, plan.as_str()))
    }

    fn subscriptions_for_user(&self, user_id: i64) -> CraftnetResult<Vec<SubscriptionRecord>> {
        self.pool
            .with_reader(|conn| subscription_ops::list_for_user(conn, user_id))
    }

    fn insert_user(
        &self,
        email: &str,
        support_plan: Option<&str>,
        support_plan_expiry: Option<DateTime<Utc>>,
    ) -> CraftnetResult<i64> {
        self.pool
            .with_writer(|conn| user_ops::insert(conn, email, support_plan, support_plan_expiry))
    }

    fn set_manual_plan(
        &self,
        user_id: i64,
        support_plan: Option<&str>,
        support_plan_expiry: Option<DateTime<Utc>>,
    ) -> CraftnetResult<()> {
        self.pool.with_writer(|conn| {
            user_ops::update_manual_plan(conn, user_id, support_plan, support_plan_expiry)
        })
    }

    fn insert_subscription(&self, user_id: i64, plan: &str, is_expired: bool) -> CraftnetResult<i64> {
        self.pool
            .with_writer(|conn| subscription_ops::insert(conn, user_id, plan, is_expired))
    }

    fn set_subscription_expired(&self, subscription_id: i64, is_expired: bool) -> CraftnetResult<()> {
        self.pool
            .with_writer(|conn| subscription_ops::update_expired(conn, subscription_id, is_expired))
    }
}
