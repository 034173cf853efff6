// src/lib.rs
// =============================================================================
// json-fetcher: fetch JSON from an endpoint and watch it settle.
//
// Layout:
// - fetcher:   DataFetcher, its state, errors and events
// - transport: the network seam (reqwest-backed HttpTransport)
// - views:     Posts and Users, which render a fetcher's state as a list
//
// The binary in main.rs wires these together behind a small CLI.
// =============================================================================

pub mod fetcher;
pub mod transport;
pub mod views;

pub use fetcher::{DataFetcher, FetchError, FetchState, RequestDescriptor, RequestOptions};
