//! # craftnet-dashboard
//!
//! Loads the account dashboard bundle with one request and fans it out into
//! independent, wholesale-replaced state slices.
//!
//! ## Modules
//! - `payload`: the bundle as returned by the account API
//! - `state`: `AppState` and its slices, updated by pure `receive_*` reducers
//! - `source`: `DashboardSource` trait and the reqwest-backed `HttpDashboardSource`
//! - `store`: `DashboardStore`, which owns the state and guards in-flight loads

pub mod payload;
pub mod source;
pub mod state;
pub mod store;

pub use payload::{CurrentUser, DashboardPayload};
pub use source::{DashboardSource, HttpDashboardSource};
pub use state::AppState;
pub use store::DashboardStore;
