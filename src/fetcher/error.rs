// src/fetcher/error.rs
// =============================================================================
// Errors that can end a single fetch invocation.
//
// There are two kinds of failure:
// - Network: the server answered with a non-success status, or the request
//   never completed (connection refused, bad method, ...)
// - Parse: the body came back but was not valid JSON
//
// The state bundle only keeps the Display message. The structured variant is
// handed to the observer so logs and tests can still tell them apart.
// =============================================================================

use serde::Serialize;
use thiserror::Error;

/// Message stored in the state when the request did not succeed
pub const REQUEST_FAILED: &str = "Failed to fetch data";

/// Message stored in the state when the body was not JSON
pub const INVALID_PAYLOAD: &str = "Invalid payload";

/// Why one fetch invocation failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered, but not with a 2xx status
    #[error("{}", REQUEST_FAILED)]
    Status(u16),

    /// The request could not be sent or the response could not be read
    #[error("{}", REQUEST_FAILED)]
    Transport(String),

    /// The body was not valid JSON
    #[error("{}", INVALID_PAYLOAD)]
    Payload(String),
}

/// The coarse failure taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    NetworkFailure,
    ParseFailure,
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Status(_) | FetchError::Transport(_) => FailureKind::NetworkFailure,
            FetchError::Payload(_) => FailureKind::ParseFailure,
        }
    }

    /// Extra detail for logs (status code or underlying error text)
    pub fn detail(&self) -> String {
        match self {
            FetchError::Status(code) => format!("HTTP {}", code),
            FetchError::Transport(reason) | FetchError::Payload(reason) => reason.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_failures_share_one_message() {
        assert_eq!(FetchError::Status(500).to_string(), REQUEST_FAILED);
        assert_eq!(
            FetchError::Transport("connection refused".into()).to_string(),
            REQUEST_FAILED
        );
    }

    #[test]
    fn test_parse_failure_has_distinct_message() {
        let err = FetchError::Payload("expected value at line 1".into());
        assert_eq!(err.to_string(), INVALID_PAYLOAD);
        assert_ne!(err.to_string(), REQUEST_FAILED);
        assert_eq!(err.kind(), FailureKind::ParseFailure);
    }

    #[test]
    fn test_every_variant_maps_to_its_message_and_kind() {
        let cases = [
            (FetchError::Status(503), REQUEST_FAILED, FailureKind::NetworkFailure),
            (
                FetchError::Transport("dns error".into()),
                REQUEST_FAILED,
                FailureKind::NetworkFailure,
            ),
            (FetchError::Payload("eof".into()), INVALID_PAYLOAD, FailureKind::ParseFailure),
        ];
        for (error, message, kind) in cases {
            assert_eq!(error.to_string(), message);
            assert_eq!(error.kind(), kind);
        }
    }

    #[test]
    fn test_detail_keeps_status_code() {
        assert_eq!(FetchError::Status(404).detail(), "HTTP 404");
        assert_eq!(FetchError::Status(404).kind(), FailureKind::NetworkFailure);
    }
}
