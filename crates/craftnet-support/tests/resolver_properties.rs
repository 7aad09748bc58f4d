//! Property tests: resolution always yields one of the three labels.

use std::sync::Arc;

use chrono::{Duration, Utc};
use craftnet_core::{ISupportStore, SupportPlan};
use craftnet_storage::StorageEngine;
use craftnet_support::PlanResolver;
use proptest::prelude::*;

fn plan_label() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        Just("basic".to_string()),
        Just("pro".to_string()),
        Just("premium".to_string()),
        Just("".to_string()),
        "[a-z]{1,8}",
    ])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn unknown_emails_are_always_basic(email in "[a-z0-9.]{1,16}@[a-z]{1,8}\\.test") {
        let r = PlanResolver::new(Arc::new(StorageEngine::open_in_memory().unwrap()));
        prop_assert_eq!(r.resolve(&email).unwrap(), SupportPlan::Basic);
    }

    #[test]
    fn resolution_is_one_of_three_labels(
        manual in plan_label(),
        expiry_offset_days in prop::option::of(-30i64..30),
        subs in prop::collection::vec(("(basic|pro|premium|legacy)", any::<bool>()), 0..4),
    ) {
        let store = Arc::new(StorageEngine::open_in_memory().unwrap());
        let now = Utc::now();
        let expiry = expiry_offset_days.map(|d| now + Duration::days(d));
        let id = store.insert_user("prop@example.com", manual.as_deref(), expiry).unwrap();
        for (plan, expired) in &subs {
            store.insert_subscription(id, plan, *expired).unwrap();
        }

        let r = PlanResolver::new(Arc::clone(&store));
        let tag = r.resolve_at("prop@example.com", now).unwrap().as_str();
        prop_assert!(["basic", "pro", "premium"].contains(&tag));

        // Without an applicable override, the result is the best active subscription.
        let override_applies = manual
            .as_deref()
            .and_then(|m| m.parse::<SupportPlan>().ok())
            .filter(|p| *p != SupportPlan::Basic)
            .is_some()
            && expiry.map_or(true, |e| e > now);
        if !override_applies {
            let active = |p: &str| subs.iter().any(|(plan, expired)| plan == p && !expired);
            let expected = if active("premium") {
                SupportPlan::Premium
            } else if active("pro") {
                SupportPlan::Pro
            } else {
                SupportPlan::Basic
            };
            prop_assert_eq!(r.resolve_at("prop@example.com", now).unwrap(), expected);
        }
    }
}
