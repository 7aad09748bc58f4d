//! # craftnet-support
//!
//! Support-desk helpers.
//!
//! - `resolver`: derives the support plan tag for a ticket from the customer's email
//! - `zendesk`: builds an authenticated Zendesk API client from configuration

pub mod resolver;
pub mod zendesk;

pub use resolver::{support_plan_tag, PlanResolution, PlanResolver, PlanRule};
pub use zendesk::ZendeskClient;
