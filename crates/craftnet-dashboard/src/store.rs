//! DashboardStore: owns `AppState` and loads the dashboard bundle into it.
//!
//! A load issues one fetch; on success every slice is replaced from the
//! bundle and the bundle is returned, on failure the error is returned and
//! state is left as it was. With coalescing on (the default), a load started
//! while another is pending awaits the pending fetch instead of issuing its
//! own. If every caller waiting on a coalesced load gives up (a timeout, a
//! dropped task), the load is abandoned and the next call fetches afresh.
//! With coalescing off, loads run independently and the last to finish wins.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::task::{Context, Poll};

use futures::future::{BoxFuture, FutureExt, Shared};
use tracing::{debug, info, warn};

use craftnet_core::config::DashboardConfig;
use craftnet_core::DashboardError;

use crate::payload::DashboardPayload;
use crate::source::DashboardSource;
use crate::state::AppState;

type LoadResult = Result<DashboardPayload, DashboardError>;
type PendingLoad = Shared<BoxFuture<'static, LoadResult>>;

pub struct DashboardStore<S> {
    source: Arc<S>,
    state: Arc<RwLock<AppState>>,
    pending: Arc<Mutex<Option<PendingLoad>>>,
    in_flight: Arc<AtomicUsize>,
    coalesce: bool,
}

impl<S: DashboardSource + 'static> DashboardStore<S> {
    /// Store with empty state and coalescing on.
    pub fn new(source: S) -> Self {
        Self::with_config(source, &DashboardConfig::default())
    }

    pub fn with_config(source: S, config: &DashboardConfig) -> Self {
        Self {
            source: Arc::new(source),
            state: Arc::new(RwLock::new(AppState::default())),
            pending: Arc::new(Mutex::new(None)),
            in_flight: Arc::new(AtomicUsize::new(0)),
            coalesce: config.coalesce_in_flight,
        }
    }

    /// Seed the store with existing state.
    pub fn with_state(self, state: AppState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
            ..self
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> Result<AppState, DashboardError> {
        self.state
            .read()
            .map(|state| state.clone())
            .map_err(|e| DashboardError::State(e.to_string()))
    }

    /// Whether any fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub fn coalesces(&self) -> bool {
        self.coalesce
    }

    /// Fetch the dashboard bundle and distribute it into the state slices.
    pub async fn load_dashboard(&self) -> LoadResult {
        if !self.coalesce {
            return fetch_and_apply(
                Arc::clone(&self.source),
                Arc::clone(&self.state),
                Arc::clone(&self.in_flight),
            )
            .await;
        }

        let load = {
            let mut pending = self
                .pending
                .lock()
                .map_err(|e| DashboardError::State(e.to_string()))?;

            match pending.as_ref() {
                Some(load) => {
                    debug!("Joining pending dashboard load");
                    load.clone()
                }
                None => {
                    let load = self.start_shared_load();
                    *pending = Some(load.clone());
                    load
                }
            }
        };

        Waiter {
            slot: Arc::clone(&self.pending),
            load: Some(load),
        }
        .await
    }

    fn start_shared_load(&self) -> PendingLoad {
        let source = Arc::clone(&self.source);
        let state = Arc::clone(&self.state);
        let in_flight = Arc::clone(&self.in_flight);
        let slot = Arc::clone(&self.pending);

        async move {
            let result = fetch_and_apply(source, state, in_flight).await;
            // Loads started from here on issue a fresh fetch.
            if let Ok(mut slot) = slot.lock() {
                *slot = None;
            }
            result
        }
        .boxed()
        .shared()
    }
}

/// One caller's handle on the shared load. When the last caller is dropped
/// before the load settles, the pending slot is cleared so the fetch (and its
/// in-flight count) is dropped with it.
struct Waiter {
    slot: Arc<Mutex<Option<PendingLoad>>>,
    load: Option<PendingLoad>,
}

impl Future for Waiter {
    type Output = LoadResult;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<LoadResult> {
        let Some(load) = self.load.as_mut() else {
            return Poll::Ready(Err(DashboardError::State(
                "dashboard load polled after completion".to_string(),
            )));
        };
        match load.poll_unpin(cx) {
            Poll::Ready(result) => {
                self.load = None;
                Poll::Ready(result)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl Drop for Waiter {
    fn drop(&mut self) {
        let Some(load) = self.load.take() else {
            return;
        };
        let Ok(mut slot) = self.slot.lock() else {
            return;
        };
        // Two handles left (this one and the slot's) means nobody else is waiting.
        let abandoned = slot
            .as_ref()
            .is_some_and(|pending| pending.ptr_eq(&load) && load.strong_count() == Some(2));
        if abandoned {
            debug!("Last waiter dropped, abandoning dashboard load");
            *slot = None;
        }
        drop(load);
    }
}

/// Decrements the in-flight counter on drop, so abandoned loads are not counted.
struct InFlight(Arc<AtomicUsize>);

impl InFlight {
    fn enter(counter: Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

async fn fetch_and_apply<S: DashboardSource>(
    source: Arc<S>,
    state: Arc<RwLock<AppState>>,
    in_flight: Arc<AtomicUsize>,
) -> LoadResult {
    let _in_flight = InFlight::enter(in_flight);

    let payload = match source.fetch().await {
        Ok(payload) => payload,
        Err(e) => {
            warn!(error = %e, "Dashboard load failed, state unchanged");
            return Err(e);
        }
    };

    {
        let mut guard = state
            .write()
            .map_err(|e| DashboardError::State(e.to_string()))?;
        let current = std::mem::take(&mut *guard);
        *guard = current.receive_dashboard(payload.clone());
    }

    info!(
        categories = payload.categories.len(),
        countries = payload.countries.len(),
        plugins = payload.plugins.len(),
        cms_licenses = payload.cms_licenses.len(),
        plugin_licenses = payload.plugin_licenses.len(),
        "Dashboard loaded"
    );
    Ok(payload)
}
