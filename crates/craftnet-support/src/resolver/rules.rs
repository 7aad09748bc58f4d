//! Individual plan rules. Each rule either claims a plan or passes.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use craftnet_core::{CraftnetResult, ISupportStore, SupportPlan, UserRecord};

/// One step of the resolution chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanRule {
    /// An administrator-set plan on the user record, unless it is `basic`
    /// or its expiry has passed.
    ManualOverride,
    /// A non-expired subscription to the given plan.
    ActiveSubscription(SupportPlan),
}

impl PlanRule {
    /// Manual override first, then premium, then pro.
    pub fn default_chain() -> Vec<PlanRule> {
        vec![
            Self::ManualOverride,
            Self::ActiveSubscription(SupportPlan::Premium),
            Self::ActiveSubscription(SupportPlan::Pro),
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ManualOverride => "manual_override",
            Self::ActiveSubscription(SupportPlan::Basic) => "subscription_basic",
            Self::ActiveSubscription(SupportPlan::Pro) => "subscription_pro",
            Self::ActiveSubscription(SupportPlan::Premium) => "subscription_premium",
        }
    }

    /// `Some(plan)` if this rule matches. Storage failures propagate.
    pub fn evaluate<S>(
        &self,
        store: &S,
        user: &UserRecord,
        now: DateTime<Utc>,
    ) -> CraftnetResult<Option<SupportPlan>>
    where
        S: ISupportStore + ?Sized,
    {
        match self {
            Self::ManualOverride => Ok(manual_override(user, now)),
            Self::ActiveSubscription(plan) => {
                Ok(store.has_active_subscription(user.id, *plan)?.then_some(*plan))
            }
        }
    }
}

fn manual_override(user: &UserRecord, now: DateTime<Utc>) -> Option<SupportPlan> {
    let label = user.manual_plan()?;

    let plan = match label.parse::<SupportPlan>() {
        Ok(plan) => plan,
        Err(_) => {
            warn!(user_id = user.id, label, "Ignoring unrecognized manual support plan");
            return None;
        }
    };

    if plan == SupportPlan::Basic {
        return None;
    }

    match user.support_plan_expiry {
        // Expiry equal to now counts as expired.
        Some(expiry) if expiry <= now => {
            debug!(user_id = user.id, %expiry, "Manual support plan expired");
            None
        }
        _ => Some(plan),
    }
}
