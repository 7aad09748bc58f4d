//! Support plan resolution.
//!
//! Rules run in order and the first match wins; a user with no match, or no
//! user at all, gets `basic`. Lookup failures are returned, never defaulted.

mod rules;

use chrono::{DateTime, Utc};
use tracing::debug;

use craftnet_core::{CraftnetResult, ISupportStore, SupportPlan};

pub use rules::PlanRule;

/// Outcome of a resolution, with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanResolution {
    pub plan: SupportPlan,
    /// `None` when no user matched or no rule fired.
    pub matched_rule: Option<PlanRule>,
    pub user_id: Option<i64>,
}

/// Derives the support plan tag for a customer email.
pub struct PlanResolver<S> {
    store: S,
    rules: Vec<PlanRule>,
    fallback: SupportPlan,
}

impl<S: ISupportStore> PlanResolver<S> {
    /// Resolver with the standard chain: manual override, premium, pro.
    pub fn new(store: S) -> Self {
        Self::with_rules(store, PlanRule::default_chain())
    }

    pub fn with_rules(store: S, rules: Vec<PlanRule>) -> Self {
        Self {
            store,
            rules,
            fallback: SupportPlan::Basic,
        }
    }

    pub fn rules(&self) -> &[PlanRule] {
        &self.rules
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolve against the current time.
    pub fn resolve(&self, email: &str) -> CraftnetResult<SupportPlan> {
        self.resolve_at(email, Utc::now())
    }

    /// Resolve with an explicit clock for manual-plan expiry.
    pub fn resolve_at(&self, email: &str, now: DateTime<Utc>) -> CraftnetResult<SupportPlan> {
        Ok(self.explain_at(email, now)?.plan)
    }

    /// The ticket tag label for `email`: `"basic"`, `"pro"` or `"premium"`.
    pub fn ticket_tag(&self, email: &str) -> CraftnetResult<&'static str> {
        Ok(self.resolve(email)?.as_str())
    }

    /// Resolve and report which rule matched.
    pub fn explain_at(&self, email: &str, now: DateTime<Utc>) -> CraftnetResult<PlanResolution> {
        run_chain(&self.store, &self.rules, self.fallback, email, now)
    }
}

/// The ticket tag label for `email` using the standard rule chain.
pub fn support_plan_tag<S>(store: &S, email: &str) -> CraftnetResult<&'static str>
where
    S: ISupportStore + ?Sized,
{
    let resolution = run_chain(
        store,
        &PlanRule::default_chain(),
        SupportPlan::Basic,
        email,
        Utc::now(),
    )?;
    Ok(resolution.plan.as_str())
}

fn run_chain<S>(
    store: &S,
    rules: &[PlanRule],
    fallback: SupportPlan,
    email: &str,
    now: DateTime<Utc>,
) -> CraftnetResult<PlanResolution>
where
    S: ISupportStore + ?Sized,
{
    let Some(user) = store.find_user_by_email(email)? else {
        debug!("No user for email, using fallback plan");
        return Ok(PlanResolution {
            plan: fallback,
            matched_rule: None,
            user_id: None,
        });
    };

    for rule in rules {
        if let Some(plan) = rule.evaluate(store, &user, now)? {
            debug!(user_id = user.id, rule = rule.name(), %plan, "Support plan resolved");
            return Ok(PlanResolution {
                plan,
                matched_rule: Some(*rule),
                user_id: Some(user.id),
            });
        }
    }

    debug!(user_id = user.id, "No rule matched, using fallback plan");
    Ok(PlanResolution {
        plan: fallback,
        matched_rule: None,
        user_id: Some(user.id),
    })
}
