// src/fetcher/mod.rs
// =============================================================================
// This module contains the fetcher: the part that calls an endpoint and keeps
// { data, loading, error } up to date.
//
// Submodules:
// - data_fetcher: the DataFetcher itself and its refetch trigger
// - state:        the FetchState bundle and its transitions
// - request:      endpoint + options handed to the transport
// - error:        why an invocation failed
// - events:       structured events and the observer seam for logging
// =============================================================================

mod data_fetcher;
mod error;
mod events;
mod request;
mod state;

pub use data_fetcher::{DataFetcher, FetchHandle, Refetch};
pub use error::{FailureKind, FetchError, INVALID_PAYLOAD, REQUEST_FAILED};
pub use events::{FetchEvent, FetchObserver, TracingObserver};
pub use request::{parse_header, RequestDescriptor, RequestOptions, DEFAULT_METHOD};
pub use state::FetchState;
