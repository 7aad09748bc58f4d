//! Raw SQL operations for the subscriptions table.

use rusqlite::{params, Connection};

use craftnet_core::{CraftnetError, CraftnetResult, SubscriptionRecord};

use crate::to_storage_err;

/// Whether a non-expired subscription to `plan` exists for the user.
pub fn exists_active(conn: &Connection, user_id: i64, plan: &str) -> CraftnetResult<bool> {
    conn.query_row(
        "SELECT EXISTS(
             SELECT 1 FROM subscriptions
             WHERE user_id = ?1 AND plan = ?2 AND is_expired = 0
         )",
        params![user_id, plan],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// All subscriptions for a user, oldest first.
pub fn list_for_user(conn: &Connection, user_id: i64) -> CraftnetResult<Vec<SubscriptionRecord>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, user_id, plan, is_expired FROM subscriptions
             WHERE user_id = ?1 ORDER BY id ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![user_id], |row| {
            Ok(SubscriptionRecord {
                id: row.get(0)?,
                user_id: row.get(1)?,
                plan: row.get(2)?,
                is_expired: row.get(3)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Insert a subscription. Returns the assigned id.
pub fn insert(conn: &Connection, user_id: i64, plan: &str, is_expired: bool) -> CraftnetResult<i64> {
    conn.execute(
        "INSERT INTO subscriptions (user_id, plan, is_expired) VALUES (?1, ?2, ?3)",
        params![user_id, plan, is_expired],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(conn.last_insert_rowid())
}

/// Flip the expired flag. Errors if the subscription does not exist.
pub fn update_expired(conn: &Connection, id: i64, is_expired: bool) -> CraftnetResult<()> {
    let changed = conn
        .execute(
            "UPDATE subscriptions SET is_expired = ?2 WHERE id = ?1",
            params![id, is_expired],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    if changed == 0 {
        return Err(CraftnetError::InvalidInput(format!("no subscription with id {id}")));
    }
    Ok(())
}
