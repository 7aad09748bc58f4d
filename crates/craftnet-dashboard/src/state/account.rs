use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::payload::CurrentUser;

/// Account and billing data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountState {
    pub upcoming_invoice: Option<Value>,
    /// Connected apps keyed by provider.
    pub apps: Value,
    pub current_user: Option<CurrentUser>,
    pub billing_address: Option<Value>,
    pub card: Option<Value>,
}

impl AccountState {
    pub fn receive_upcoming_invoice(self, upcoming_invoice: Option<Value>) -> Self {
        Self { upcoming_invoice, ..self }
    }

    pub fn receive_apps(self, apps: Value) -> Self {
        Self { apps, ..self }
    }

    pub fn receive_current_user(self, current_user: Option<CurrentUser>) -> Self {
        Self { current_user, ..self }
    }

    pub fn receive_billing_address(self, billing_address: Option<Value>) -> Self {
        Self { billing_address, ..self }
    }

    pub fn receive_card(self, card: Option<Value>) -> Self {
        Self { card, ..self }
    }
}
