mod subscription;
mod support_plan;
mod user;

pub use subscription::SubscriptionRecord;
pub use support_plan::SupportPlan;
pub use user::UserRecord;
