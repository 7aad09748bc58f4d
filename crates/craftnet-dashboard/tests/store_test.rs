//! DashboardStore integration tests with in-process fake sources.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tokio::sync::Notify;

use craftnet_core::config::DashboardConfig;
use craftnet_core::DashboardError;
use craftnet_dashboard::{AppState, CurrentUser, DashboardPayload, DashboardSource, DashboardStore};

/// Returns a fixed result and counts calls.
struct FixedSource {
    result: Result<DashboardPayload, DashboardError>,
    calls: Arc<AtomicUsize>,
}

impl FixedSource {
    fn ok(payload: DashboardPayload) -> Self {
        Self {
            result: Ok(payload),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn err(error: DashboardError) -> Self {
        Self {
            result: Err(error),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl DashboardSource for FixedSource {
    async fn fetch(&self) -> Result<DashboardPayload, DashboardError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// Blocks every fetch until the gate is opened.
struct GatedSource {
    payload: DashboardPayload,
    gate: Arc<Notify>,
    calls: Arc<AtomicUsize>,
}

impl DashboardSource for GatedSource {
    async fn fetch(&self) -> Result<DashboardPayload, DashboardError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        Ok(self.payload.clone())
    }
}

fn reference_payload() -> DashboardPayload {
    DashboardPayload {
        categories: vec![json!({"id": 1, "title": "Utilities"}), json!({"id": 2})],
        countries: vec![json!({"iso": "NL"}), json!({"iso": "BE"})],
        ..Default::default()
    }
}

fn seeded_state() -> AppState {
    AppState::default().receive_dashboard(DashboardPayload {
        categories: vec![json!({"id": 99})],
        countries: vec![json!({"iso": "US"})],
        plugins: vec![json!({"handle": "seo"})],
        current_user: Some(CurrentUser {
            has_api_token: true,
            ..Default::default()
        }),
        ..Default::default()
    })
}

#[tokio::test]
async fn successful_load_replaces_slices_verbatim() {
    let store = DashboardStore::new(FixedSource::ok(reference_payload())).with_state(seeded_state());

    let payload = store.load_dashboard().await.unwrap();
    assert_eq!(payload, reference_payload());

    let state = store.state().unwrap();
    assert_eq!(
        state.craft_id.categories,
        vec![json!({"id": 1, "title": "Utilities"}), json!({"id": 2})]
    );
    assert_eq!(state.craft_id.countries, vec![json!({"iso": "NL"}), json!({"iso": "BE"})]);
    // Absent fields replace too; slices are never merged.
    assert!(state.developers.plugins.is_empty());
    assert!(!state.developers.has_api_token);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn full_bundle_routes_every_field() {
    let payload: DashboardPayload = serde_json::from_value(json!({
        "categories": [{"id": 1}],
        "countries": [{"iso": "NL"}],
        "currentUser": {"id": 7, "email": "dev@example.com", "hasApiToken": true},
        "plugins": [{"handle": "seo"}],
        "sales": [{"id": 11}],
        "cmsLicenses": [{"key": "CMS-1"}],
        "pluginLicenses": [{"key": "PL-1"}],
        "upcomingInvoice": {"amount": 59},
        "apps": {"github": {"connected": true}},
        "billingAddress": {"city": "Utrecht"},
        "card": {"last4": "4242"}
    }))
    .unwrap();

    let store = DashboardStore::new(FixedSource::ok(payload));
    store.load_dashboard().await.unwrap();
    let state = store.state().unwrap();

    assert!(state.developers.has_api_token);
    assert_eq!(state.developers.plugins, vec![json!({"handle": "seo"})]);
    assert_eq!(state.developers.sales, vec![json!({"id": 11})]);
    assert_eq!(state.licenses.cms_licenses, vec![json!({"key": "CMS-1"})]);
    assert_eq!(state.licenses.plugin_licenses, vec![json!({"key": "PL-1"})]);
    assert_eq!(state.account.upcoming_invoice, Some(json!({"amount": 59})));
    assert_eq!(state.account.apps, json!({"github": {"connected": true}}));
    assert_eq!(state.account.billing_address, Some(json!({"city": "Utrecht"})));
    assert_eq!(state.account.card, Some(json!({"last4": "4242"})));

    let user = state.account.current_user.unwrap();
    assert_eq!(user.fields.get("email"), Some(&json!("dev@example.com")));
}

#[tokio::test]
async fn failed_load_surfaces_error_and_keeps_state() {
    let error = DashboardError::Status {
        status: 500,
        body: "upstream exploded".to_string(),
    };
    let store = DashboardStore::new(FixedSource::err(error.clone())).with_state(seeded_state());

    let result = store.load_dashboard().await;
    assert_eq!(result, Err(error));
    assert_eq!(store.state().unwrap(), seeded_state());
    assert!(!store.is_loading());
}

#[tokio::test]
async fn sequential_loads_fetch_each_time() {
    let source = FixedSource::ok(reference_payload());
    let calls = Arc::clone(&source.calls);
    let store = DashboardStore::new(source);

    store.load_dashboard().await.unwrap();
    store.load_dashboard().await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn concurrent_loads_coalesce_onto_one_fetch() {
    let gate = Arc::new(Notify::new());
    let calls = Arc::new(AtomicUsize::new(0));
    let store = Arc::new(DashboardStore::new(GatedSource {
        payload: reference_payload(),
        gate: Arc::clone(&gate),
        calls: Arc::clone(&calls),
    }));
    assert!(store.coalesces());

    let first = tokio::spawn({
        let store = Arc::clone(&store);
        async move { store.load_dashboard().await }
    });
    let second = tokio::spawn({
        let store = Arc::clone(&store);
        async move { store.load_dashboard().await }
    });

    while calls.load(Ordering::SeqCst) == 0 {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(store.is_loading());

    gate.notify_one();
    let first = first.await.unwrap().unwrap();
    let second = second.await.unwrap().unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(first, second);
    assert_eq!(store.state().unwrap().craft_id.countries, reference_payload().countries);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn uncoalesced_loads_fetch_independently() {
    let gate = Arc::new(Notify::new());
    let calls = Arc::new(AtomicUsize::new(0));
    let config = DashboardConfig {
        coalesce_in_flight: false,
        ..Default::default()
    };
    let store = Arc::new(DashboardStore::with_config(
        GatedSource {
            payload: reference_payload(),
            gate: Arc::clone(&gate),
            calls: Arc::clone(&calls),
        },
        &config,
    ));
    assert!(!store.coalesces());

    let first = tokio::spawn({
        let store = Arc::clone(&store);
        async move { store.load_dashboard().await }
    });
    let second = tokio::spawn({
        let store = Arc::clone(&store);
        async move { store.load_dashboard().await }
    });

    while calls.load(Ordering::SeqCst) < 2 {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    gate.notify_waiters();

    first.await.unwrap().unwrap();
    second.await.unwrap().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn load_after_coalesced_failure_fetches_again() {
    let source = FixedSource::err(DashboardError::Transport("connection reset".to_string()));
    let calls = Arc::clone(&source.calls);
    let store = DashboardStore::new(source);

    assert!(store.load_dashboard().await.is_err());
    assert!(store.load_dashboard().await.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn timed_out_coalesced_load_is_abandoned() {
    let gate = Arc::new(Notify::new());
    let calls = Arc::new(AtomicUsize::new(0));
    let store = DashboardStore::new(GatedSource {
        payload: reference_payload(),
        gate: Arc::clone(&gate),
        calls: Arc::clone(&calls),
    })
    .with_state(seeded_state());

    let timed_out = tokio::time::timeout(Duration::from_millis(50), store.load_dashboard()).await;
    assert!(timed_out.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(!store.is_loading(), "abandoned load still counted as in flight");
    assert_eq!(store.state().unwrap(), seeded_state());

    // The next load starts a fresh fetch instead of resuming the stalled one.
    let next = tokio::spawn({
        let store = Arc::new(store);
        async move {
            let result = store.load_dashboard().await;
            (result, store)
        }
    });
    while calls.load(Ordering::SeqCst) < 2 {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    gate.notify_one();

    let (result, store) = next.await.unwrap();
    assert_eq!(result.unwrap(), reference_payload());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn one_timed_out_waiter_does_not_abandon_shared_load() {
    let gate = Arc::new(Notify::new());
    let calls = Arc::new(AtomicUsize::new(0));
    let store = Arc::new(DashboardStore::new(GatedSource {
        payload: reference_payload(),
        gate: Arc::clone(&gate),
        calls: Arc::clone(&calls),
    }));

    let patient = tokio::spawn({
        let store = Arc::clone(&store);
        async move { store.load_dashboard().await }
    });
    while calls.load(Ordering::SeqCst) == 0 {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let impatient = tokio::time::timeout(Duration::from_millis(20), store.load_dashboard()).await;
    assert!(impatient.is_err());
    assert!(store.is_loading());

    gate.notify_one();
    assert_eq!(patient.await.unwrap().unwrap(), reference_payload());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(!store.is_loading());
}
