//! Application state for the account dashboard.
//!
//! Every slice is replaced wholesale by its `receive_*` reducer. Reducers take
//! the old value and return the new one; nothing is mutated in place.

mod account;
mod craft_id;
mod developers;
mod licenses;

pub use account::AccountState;
pub use craft_id::CraftIdState;
pub use developers::DevelopersState;
pub use licenses::LicensesState;

use serde::{Deserialize, Serialize};

use crate::payload::DashboardPayload;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub craft_id: CraftIdState,
    pub developers: DevelopersState,
    pub licenses: LicensesState,
    pub account: AccountState,
}

impl AppState {
    /// Route every field of a dashboard bundle into its slice.
    pub fn receive_dashboard(self, payload: DashboardPayload) -> Self {
        let has_api_token = payload
            .current_user
            .as_ref()
            .is_some_and(|user| user.has_api_token);

        Self {
            craft_id: self
                .craft_id
                .receive_categories(payload.categories)
                .receive_countries(payload.countries),
            developers: self
                .developers
                .receive_has_api_token(has_api_token)
                .receive_plugins(payload.plugins)
                .receive_sales(payload.sales),
            licenses: self
                .licenses
                .receive_cms_licenses(payload.cms_licenses)
                .receive_plugin_licenses(payload.plugin_licenses),
            account: self
                .account
                .receive_upcoming_invoice(payload.upcoming_invoice)
                .receive_apps(payload.apps)
                .receive_current_user(payload.current_user)
                .receive_billing_address(payload.billing_address)
                .receive_card(payload.card),
        }
    }
}
