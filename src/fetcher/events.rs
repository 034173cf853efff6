// src/fetcher/events.rs
// =============================================================================
// Structured events emitted by the fetcher.
//
// Instead of printing diagnostics directly, the fetcher reports what happened
// to a FetchObserver. The binary uses TracingObserver, which turns events into
// tracing log lines. Tests plug in their own observer and assert on the events
// themselves rather than on formatted text.
// =============================================================================

use super::error::FailureKind;

/// One thing that happened during a fetch invocation
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent {
    /// A request is about to be sent
    Started {
        generation: u64,
        endpoint: String,
        method: String,
    },
    /// The payload was parsed and written to state
    Succeeded { generation: u64, endpoint: String },
    /// The invocation failed and the message was written to state
    Failed {
        generation: u64,
        endpoint: String,
        kind: FailureKind,
        detail: String,
    },
    /// A newer invocation started before this one settled, so its
    /// outcome was dropped
    Discarded { generation: u64, latest: u64 },
}

impl FetchEvent {
    pub fn generation(&self) -> u64 {
        match self {
            FetchEvent::Started { generation, .. }
            | FetchEvent::Succeeded { generation, .. }
            | FetchEvent::Failed { generation, .. }
            | FetchEvent::Discarded { generation, .. } => *generation,
        }
    }
}

/// Receives fetch events. Must be cheap: it is called inline.
pub trait FetchObserver: Send + Sync {
    fn on_event(&self, event: &FetchEvent);
}

/// Default observer: forwards every event to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl FetchObserver for TracingObserver {
    fn on_event(&self, event: &FetchEvent) {
        match event {
            FetchEvent::Started {
                generation,
                endpoint,
                method,
            } => {
                tracing::debug!(generation, %endpoint, %method, "fetch started");
            }
            FetchEvent::Succeeded {
                generation,
                endpoint,
            } => {
                tracing::info!(generation, %endpoint, "fetch succeeded");
            }
            FetchEvent::Failed {
                generation,
                endpoint,
                kind,
                detail,
            } => {
                tracing::warn!(generation, %endpoint, ?kind, %detail, "fetch failed");
            }
            FetchEvent::Discarded { generation, latest } => {
                tracing::debug!(generation, latest, "stale response discarded");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_of_every_variant() {
        let events = [
            FetchEvent::Started {
                generation: 1,
                endpoint: "e".into(),
                method: "GET".into(),
            },
            FetchEvent::Succeeded {
                generation: 1,
                endpoint: "e".into(),
            },
            FetchEvent::Failed {
                generation: 1,
                endpoint: "e".into(),
                kind: FailureKind::ParseFailure,
                detail: "eof".into(),
            },
            FetchEvent::Discarded {
                generation: 1,
                latest: 2,
            },
        ];
        assert!(events.iter().all(|e| e.generation() == 1));
    }

    #[test]
    fn test_tracing_observer_without_subscriber() {
        // No subscriber installed: events are simply dropped
        TracingObserver.on_event(&FetchEvent::Discarded {
            generation: 3,
            latest: 4,
        });
    }
}
