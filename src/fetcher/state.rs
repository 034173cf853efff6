// src/fetcher/state.rs
// =============================================================================
// The observable state of a fetcher: { data, loading, error }.
//
// Transitions:
//   fresh            -> data: None, loading: false, error: None
//   begin            -> loading: true, error cleared, data kept
//   settle (ok)      -> data: Some(payload), loading: false
//   settle (failure) -> error: Some(message), loading: false, data kept
// =============================================================================

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FetchState {
    /// Last successfully parsed payload, None until the first success
    pub data: Option<Value>,
    /// True only while a request is outstanding
    pub loading: bool,
    /// Message of the last failure, None until the first failure
    pub error: Option<String>,
}

impl FetchState {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn succeed(&mut self, payload: Value) {
        self.data = Some(payload);
        self.loading = false;
    }

    pub fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    /// Settled means no request is in flight and at least one has finished
    pub fn is_settled(&self) -> bool {
        !self.loading && (self.data.is_some() || self.error.is_some())
    }
}
