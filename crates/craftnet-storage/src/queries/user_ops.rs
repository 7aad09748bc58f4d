//! Raw SQL operations for the users table.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use craftnet_core::{CraftnetError, CraftnetResult, StorageError, UserRecord};

use crate::to_storage_err;

/// Case-folded lookup key for an email. Unicode-aware, unlike SQLite `lower()`.
pub fn fold_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Find a user by email, ignoring case on both sides. Lowest id wins.
pub fn find_by_email(conn: &Connection, email: &str) -> CraftnetResult<Option<UserRecord>> {
    let raw = conn
        .query_row(
            "SELECT id, email, support_plan, support_plan_expiry
             FROM users
             WHERE email_folded = ?1
             ORDER BY id ASC
             LIMIT 1",
            params![fold_email(email)],
            RawUser::from_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    raw.map(RawUser::into_record).transpose()
}

/// Find a user by id.
pub fn find_by_id(conn: &Connection, id: i64) -> CraftnetResult<Option<UserRecord>> {
    let raw = conn
        .query_row(
            "SELECT id, email, support_plan, support_plan_expiry FROM users WHERE id = ?1",
            params![id],
            RawUser::from_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    raw.map(RawUser::into_record).transpose()
}

/// Insert a user. Returns the assigned id.
pub fn insert(
    conn: &Connection,
    email: &str,
    support_plan: Option<&str>,
    support_plan_expiry: Option<DateTime<Utc>>,
) -> CraftnetResult<i64> {
    conn.execute(
        "INSERT INTO users (email, email_folded, support_plan, support_plan_expiry)
         VALUES (?1, ?2, ?3, ?4)",
        params![email, fold_email(email), support_plan, support_plan_expiry.map(expiry_to_text)],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(conn.last_insert_rowid())
}

/// Set or clear the manual plan override. Errors if the user does not exist.
pub fn update_manual_plan(
    conn: &Connection,
    id: i64,
    support_plan: Option<&str>,
    support_plan_expiry: Option<DateTime<Utc>>,
) -> CraftnetResult<()> {
    let changed = conn
        .execute(
            "UPDATE users SET support_plan = ?2, support_plan_expiry = ?3 WHERE id = ?1",
            params![id, support_plan, support_plan_expiry.map(expiry_to_text)],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    if changed == 0 {
        return Err(CraftnetError::InvalidInput(format!("no user with id {id}")));
    }
    Ok(())
}

/// RFC 3339 with nanoseconds, so sub-second expiries survive a round trip.
fn expiry_to_text(expiry: DateTime<Utc>) -> String {
    expiry.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Row as stored; expiry is RFC 3339 text.
struct RawUser {
    id: i64,
    email: String,
    support_plan: Option<String>,
    support_plan_expiry: Option<String>,
}

impl RawUser {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            email: row.get(1)?,
            support_plan: row.get(2)?,
            support_plan_expiry: row.get(3)?,
        })
    }

    fn into_record(self) -> CraftnetResult<UserRecord> {
        let support_plan_expiry = match self.support_plan_expiry {
            Some(text) => Some(
                DateTime::parse_from_rfc3339(&text)
                    .map(|t| t.with_timezone(&Utc))
                    .map_err(|e| {
                        CraftnetError::StorageError(StorageError::CorruptRow {
                            table: "users".to_string(),
                            message: format!("support_plan_expiry {text:?}: {e}"),
                        })
                    })?,
            ),
            None => None,
        };

        Ok(UserRecord {
            id: self.id,
            email: self.email,
            support_plan: self.support_plan,
            support_plan_expiry,
        })
    }
}
