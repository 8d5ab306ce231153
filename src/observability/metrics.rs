//! Metrics registry for csvapi
//!
//! - Counters only
//! - Monotonic increase
//! - Reset only on process start

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Request counters.
///
/// Relaxed ordering throughout: counters are independent and only read for
/// reporting.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Records queries executed
    queries_executed: AtomicU64,
    /// Records returned across all query pages
    records_served: AtomicU64,
    /// Single-record lookups attempted
    lookups: AtomicU64,
    /// Single-record lookups that found nothing
    lookups_not_found: AtomicU64,
    /// Column searches executed, including those on unknown columns
    column_searches: AtomicU64,
    /// Requests rejected by boundary validation
    requests_rejected: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one records query returning `returned` records
    pub fn record_query(&self, returned: usize) {
        self.queries_executed.fetch_add(1, Ordering::Relaxed);
        self.records_served
            .fetch_add(returned as u64, Ordering::Relaxed);
    }

    pub fn increment_lookups(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_lookups_not_found(&self) {
        self.lookups_not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_column_searches(&self) {
        self.column_searches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_requests_rejected(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Consistent-enough copy of every counter
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            queries_executed: self.queries_executed.load(Ordering::Relaxed),
            records_served: self.records_served.load(Ordering::Relaxed),
            lookups: self.lookups.load(Ordering::Relaxed),
            lookups_not_found: self.lookups_not_found.load(Ordering::Relaxed),
            column_searches: self.column_searches.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time counter values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub queries_executed: u64,
    pub records_served: u64,
    pub lookups: u64,
    pub lookups_not_found: u64,
    pub column_searches: u64,
    pub requests_rejected: u64,
}
