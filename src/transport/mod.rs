// src/transport/mod.rs
// =============================================================================
// The network seam used by the fetcher.
//
// A Transport takes a request descriptor and returns the raw status and body.
// It does not judge the status or parse the body; the fetcher does that.
// The real implementation lives in http.rs and uses reqwest.
// =============================================================================

mod http;

pub use http::HttpTransport;

use async_trait::async_trait;
use thiserror::Error;

use crate::fetcher::RequestDescriptor;

/// Status and raw body of a finished round trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Why the round trip itself could not complete
#[derive(Debug, Error)]
pub enum TransportError {
    /// Method or header could not be turned into a valid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// Connection, DNS, TLS or body read failure
    #[error("Connection error: {0}")]
    Connection(String),
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &RequestDescriptor) -> Result<TransportResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(TransportResponse::new(200, "").is_success());
        assert!(TransportResponse::new(204, "").is_success());
        assert!(!TransportResponse::new(304, "").is_success());
        assert!(!TransportResponse::new(500, "").is_success());
    }
}
