use serde::{Deserialize, Serialize};

/// A commerce subscription held by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    pub id: i64,
    pub user_id: i64,
    /// Plan handle, e.g. `"pro"`.
    pub plan: String,
    pub is_expired: bool,
}
