//! # craftnet-core
//!
//! Shared foundation for the craftnet workspace.
//!
//! ## Modules
//! - `config`: CraftnetConfig and per-subsystem sections, TOML + environment loading
//! - `errors`: CraftnetError, StorageError, DashboardError
//! - `models`: SupportPlan, UserRecord, SubscriptionRecord
//! - `observability`: tracing-subscriber initialization
//! - `traits`: ISupportStore, the user/subscription persistence seam

pub mod config;
pub mod errors;
pub mod models;
pub mod observability;
pub mod traits;

pub use config::CraftnetConfig;
pub use errors::{CraftnetError, CraftnetResult, DashboardError, StorageError};
pub use models::{SubscriptionRecord, SupportPlan, UserRecord};
pub use traits::ISupportStore;
