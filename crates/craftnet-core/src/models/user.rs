use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer account as far as support tiering is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    /// Plan label set by an administrator, if any.
    pub support_plan: Option<String>,
    /// When the manual plan stops applying. `None` means it never expires.
    pub support_plan_expiry: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// The manual plan label, trimmed. Empty labels count as unset.
    pub fn manual_plan(&self) -> Option<&str> {
        self.support_plan
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
    }
}
