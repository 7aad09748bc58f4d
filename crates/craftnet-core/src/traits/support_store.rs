//! `ISupportStore`: the persistence seam behind support-plan resolution.
//!
//! Resolution only needs the two reads; the writes exist for seeding and
//! administration of manual overrides.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::errors::CraftnetResult;
use crate::models::{SubscriptionRecord, SupportPlan, UserRecord};

pub trait ISupportStore: Send + Sync {
    // ── Reads ──

    /// Find the user whose email matches case-insensitively.
    /// Returns the lowest id when several rows match.
    fn find_user_by_email(&self, email: &str) -> CraftnetResult<Option<UserRecord>>;

    /// Whether the user holds a non-expired subscription to `plan`.
    fn has_active_subscription(&self, user_id: i64, plan: SupportPlan) -> CraftnetResult<bool>;

    /// All subscriptions for a user, oldest first.
    fn subscriptions_for_user(&self, user_id: i64) -> CraftnetResult<Vec<SubscriptionRecord>>;

    // ── Writes ──

    /// Insert a user. Returns the new id.
    fn insert_user(
        &self,
        email: &str,
        support_plan: Option<&str>,
        support_plan_expiry: Option<DateTime<Utc>>,
    ) -> CraftnetResult<i64>;

    /// Set or clear a user's manual plan override.
    fn set_manual_plan(
        &self,
        user_id: i64,
        support_plan: Option<&str>,
        support_plan_expiry: Option<DateTime<Utc>>,
    ) -> CraftnetResult<()>;

    /// Insert a subscription. Returns the new id.
    fn insert_subscription(&self, user_id: i64, plan: &str, is_expired: bool) -> CraftnetResult<i64>;

    /// Mark a subscription expired or active.
    fn set_subscription_expired(&self, subscription_id: i64, is_expired: bool) -> CraftnetResult<()>;
}

// ── Arc<T> blanket impl ──

impl<T: ISupportStore + ?Sized> ISupportStore for Arc<T> {
    fn find_user_by_email(&self, email: &str) -> CraftnetResult<Option<UserRecord>> {
        (**self).find_user_by_email(email)
    }

    fn has_active_subscription(&self, user_id: i64, plan: SupportPlan) -> CraftnetResult<bool> {
        (**self).has_active_subscription(user_id, plan)
    }

    fn subscriptions_for_user(&self, user_id: i64) -> CraftnetResult<Vec<SubscriptionRecord>> {
        (**self).subscriptions_for_user(user_id)
    }

    fn insert_user(
        &self,
        email: &str,
        support_plan: Option<&str>,
        support_plan_expiry: Option<DateTime<Utc>>,
    ) -> CraftnetResult<i64> {
        (**self).insert_user(email, support_plan, support_plan_expiry)
    }

    fn set_manual_plan(
        &self,
        user_id: i64,
        support_plan: Option<&str>,
        support_plan_expiry: Option<DateTime<Utc>>,
    ) -> CraftnetResult<()> {
        (**self).set_manual_plan(user_id, support_plan, support_plan_expiry)
    }

    fn insert_subscription(&self, user_id: i64, plan: &str, is_expired: bool) -> CraftnetResult<i64> {
        (**self).insert_subscription(user_id, plan, is_expired)
    }

    fn set_subscription_expired(&self, subscription_id: i64, is_expired: bool) -> CraftnetResult<()> {
        (**self).set_subscription_expired(subscription_id, is_expired)
    }
}
