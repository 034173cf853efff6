// src/fetcher/data_fetcher.rs
// =============================================================================
// DataFetcher: one endpoint, one observable state, and a way to re-run.
//
// How an invocation works:
// 1. begin:  take the next generation number, set loading, clear the error
// 2. send:   hand the request to the transport and wait for the round trip
// 3. judge:  non-2xx -> network failure; body not JSON -> parse failure
// 4. settle: write data or error and clear loading, but only if no newer
//            invocation has begun in the meantime
//
// The state lives in a tokio watch channel. Every write (begin, settle, reset)
// happens inside the channel's lock, and the generation counter is bumped and
// compared there too, so "is this still the latest?" and "write it" cannot be
// split by another invocation.
//
// Starting an invocation also holds the request lock: swapping the endpoint,
// taking the generation and copying the request happen as one step. Lock
// order is always request, then state.
// =============================================================================

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::error::FetchError;
use super::events::{FetchEvent, FetchObserver, TracingObserver};
use super::request::RequestDescriptor;
use super::state::FetchState;
use crate::transport::{HttpTransport, Transport};

/// Fetches JSON from an endpoint and publishes the state of the last call
///
/// Cloning gives another handle to the same fetcher.
#[derive(Clone)]
pub struct DataFetcher {
    inner: Arc<Inner>,
}

struct Inner {
    transport: Arc<dyn Transport>,
    observer: Arc<dyn FetchObserver>,
    request: Mutex<RequestDescriptor>,
    generation: AtomicU64,
    state: watch::Sender<FetchState>,
}

/// What consumers get back: the current state plus a way to re-run
#[derive(Clone)]
pub struct FetchHandle {
    pub data: Option<Value>,
    pub loading: bool,
    pub error: Option<String>,
    pub refetch: Refetch,
}

/// Zero-argument trigger that re-runs the fetch for the current request
#[derive(Clone)]
pub struct Refetch {
    inner: Arc<Inner>,
}

impl Refetch {
    /// Enters loading right away, then finishes the fetch on a tokio task
    ///
    /// Must be called from inside a tokio runtime.
    pub fn trigger(&self) -> JoinHandle<FetchState> {
        let (generation, request) = self.inner.begin();
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move { inner.complete(generation, request).await })
    }
}

impl DataFetcher {
    /// A fetcher for `request` that talks HTTP and logs through `tracing`
    ///
    /// Nothing is sent until `load`, `refetch` or `mount` is called.
    pub fn new(request: RequestDescriptor) -> Self {
        Self::with_parts(request, Arc::new(HttpTransport::new()), Arc::new(TracingObserver))
    }

    pub fn with_parts(
        request: RequestDescriptor,
        transport: Arc<dyn Transport>,
        observer: Arc<dyn FetchObserver>,
    ) -> Self {
        let (state, _) = watch::channel(FetchState::default());
        Self {
            inner: Arc::new(Inner {
                transport,
                observer,
                request: Mutex::new(request),
                generation: AtomicU64::new(0),
                state,
            }),
        }
    }

    /// Initial load, run on a tokio task (loading is set before returning)
    pub fn mount(&self) -> JoinHandle<FetchState> {
        self.refetch_trigger().trigger()
    }

    /// Runs one invocation to settlement and returns the resulting state
    pub async fn load(&self) -> FetchState {
        let (generation, request) = self.inner.begin();
        self.inner.complete(generation, request).await
    }

    /// Re-runs the fetch against the same endpoint and options
    pub async fn refetch(&self) -> FetchState {
        self.load().await
    }

    /// Points the fetcher at a new endpoint and fetches it
    ///
    /// Returns None, without sending anything, when `endpoint` is the one
    /// already in use. Otherwise the state starts over from scratch.
    pub async fn set_endpoint(&self, endpoint: impl Into<String>) -> Option<FetchState> {
        let (generation, request) = self.inner.begin_at(endpoint.into())?;
        Some(self.inner.complete(generation, request).await)
    }

    pub fn refetch_trigger(&self) -> Refetch {
        Refetch {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Current state plus the refetch trigger
    pub fn handle(&self) -> FetchHandle {
        let state = self.state();
        FetchHandle {
            data: state.data,
            loading: state.loading,
            error: state.error,
            refetch: self.refetch_trigger(),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> FetchState {
        self.inner.state.borrow().clone()
    }

    /// Receiver that sees every state transition
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.inner.state.subscribe()
    }

    /// The request the next invocation will send
    pub fn request(&self) -> RequestDescriptor {
        self.inner.request.lock().clone()
    }

    /// Generation of the most recent invocation (0 before the first)
    pub fn generation(&self) -> u64 {
        self.inner.generation.load(Ordering::SeqCst)
    }
}

impl Inner {
    // Starts an invocation against the current request
    fn begin(&self) -> (u64, RequestDescriptor) {
        let request = self.request.lock();
        let started = self.start(&request, false);
        drop(request);

        self.announce(&started);
        started
    }

    // Switches to `endpoint` and starts an invocation from a fresh state.
    // None when `endpoint` is already the current one.
    fn begin_at(&self, endpoint: String) -> Option<(u64, RequestDescriptor)> {
        let mut request = self.request.lock();
        if request.endpoint == endpoint {
            return None;
        }
        request.endpoint = endpoint;
        let started = self.start(&request, true);
        drop(request);

        self.announce(&started);
        Some(started)
    }

    // Caller holds the request lock
    fn start(&self, request: &RequestDescriptor, reset: bool) -> (u64, RequestDescriptor) {
        let mut generation = 0;

        self.state.send_modify(|state| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            if reset {
                *state = FetchState::default();
            }
            state.begin();
        });

        (generation, request.clone())
    }

    fn announce(&self, (generation, request): &(u64, RequestDescriptor)) {
        self.observer.on_event(&FetchEvent::Started {
            generation: *generation,
            endpoint: request.endpoint.clone(),
            method: request.options.method().to_string(),
        });
    }

    async fn complete(&self, generation: u64, request: RequestDescriptor) -> FetchState {
        let outcome = self.perform(&request).await;

        let mut latest = generation;
        let applied = self.state.send_if_modified(|state| {
            latest = self.generation.load(Ordering::SeqCst);
            if latest != generation {
                return false;
            }
            match &outcome {
                Ok(payload) => state.succeed(payload.clone()),
                Err(error) => state.fail(error.to_string()),
            }
            true
        });

        let event = if !applied {
            FetchEvent::Discarded { generation, latest }
        } else {
            match outcome {
                Ok(_) => FetchEvent::Succeeded {
                    generation,
                    endpoint: request.endpoint,
                },
                Err(error) => FetchEvent::Failed {
                    generation,
                    endpoint: request.endpoint,
                    kind: error.kind(),
                    detail: error.detail(),
                },
            }
        };
        self.observer.on_event(&event);

        self.state.borrow().clone()
    }

    // One round trip plus the status and body checks
    async fn perform(&self, request: &RequestDescriptor) -> Result<Value, FetchError> {
        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.is_success() {
            return Err(FetchError::Status(response.status));
        }

        serde_json::from_slice(&response.body).map_err(|e| FetchError::Payload(e.to_string()))
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is a watch channel?
//    - A single-value channel: one Sender holds the latest value
//    - Every Receiver can read it and wait for the next change
//    - send_modify edits the value in place and wakes the receivers
//    - send_if_modified does the same, but only notifies if the closure
//      returns true
//
// 2. Why Arc<Inner>?
//    - Arc = atomically reference-counted pointer, shared across tasks
//    - DataFetcher, Refetch and spawned tasks all point at the same Inner
//    - The Inner is freed when the last of them is dropped
//
// 3. What is Arc<dyn Transport>?
//    - A trait object: any type implementing Transport can sit behind it
//    - Production code uses HttpTransport, tests use fakes
//
// 4. Why AtomicU64 for the generation?
//    - It can be bumped through &self, no &mut needed
//    - SeqCst ordering keeps reads and writes in one global order
// -----------------------------------------------------------------------------
