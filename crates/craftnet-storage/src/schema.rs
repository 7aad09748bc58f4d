//! Schema SQL constants, used by migrations.rs.

/// V1 schema: users + subscriptions.
pub const SCHEMA_V1: &str = "
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT NOT NULL,
        email_folded TEXT NOT NULL,
        support_plan TEXT,
        support_plan_expiry TEXT,
        created_at INTEGER NOT NULL DEFAULT (unixepoch())
    ) STRICT;

    CREATE TABLE IF NOT EXISTS subscriptions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        plan TEXT NOT NULL,
        is_expired INTEGER NOT NULL DEFAULT 0,
        created_at INTEGER NOT NULL DEFAULT (unixepoch())
    ) STRICT;

    CREATE INDEX IF NOT EXISTS idx_users_email_folded ON users(email_folded);
    CREATE INDEX IF NOT EXISTS idx_subscriptions_user_plan ON subscriptions(user_id, plan);
";

/// Tables owned by this crate.
pub const TABLE_NAMES: [&str; 2] = ["users", "subscriptions"];
