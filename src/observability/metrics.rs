//! Counter registry for a filter session
//!
//! - Counters only, monotonic
//! - Owned by the session that serves requests; there is no global registry
//! - Thread-safe via relaxed atomics

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Request and element counters.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Requests answered with a result
    requests_served: AtomicU64,
    /// Requests answered with an error
    requests_rejected: AtomicU64,
    /// Input elements handed to the engine
    elements_scanned: AtomicU64,
    /// Output elements produced
    elements_returned: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a served request with its input and output sizes
    pub fn record_served(&self, scanned: usize, returned: usize) {
        self.requests_served.fetch_add(1, Ordering::Relaxed);
        self.elements_scanned
            .fetch_add(scanned as u64, Ordering::Relaxed);
        self.elements_returned
            .fetch_add(returned as u64, Ordering::Relaxed);
    }

    /// Record a rejected request
    pub fn record_rejected(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of every counter
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_served: self.requests_served.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
            elements_scanned: self.elements_scanned.load(Ordering::Relaxed),
            elements_returned: self.elements_returned.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub requests_served: u64,
    pub requests_rejected: u64,
    pub elements_scanned: u64,
    pub elements_returned: u64,
}

impl MetricsSnapshot {
    /// Counters as string pairs, for log fields
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("requests_served", self.requests_served.to_string()),
            ("requests_rejected", self.requests_rejected.to_string()),
            ("elements_scanned", self.elements_scanned.to_string()),
            ("elements_returned", self.elements_returned.to_string()),
        ]
    }
}
