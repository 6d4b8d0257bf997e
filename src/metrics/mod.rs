//! Basic metrics instrumentation for directory operations.
//!
//! Provides counters for inserts, lookups, deletes and listings.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics collector for tracking directory activity.
///
/// Cloning is cheap and every clone shares the same counters.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Contacts successfully inserted
    inserts_total: Arc<AtomicU64>,

    /// Inserts rejected by validation or uniqueness
    inserts_rejected_total: Arc<AtomicU64>,

    /// Search calls
    searches_total: Arc<AtomicU64>,

    /// Search calls that found nothing
    search_misses_total: Arc<AtomicU64>,

    /// Contacts removed
    deletes_total: Arc<AtomicU64>,

    /// Snapshots produced by list
    lists_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            inserts_total: Arc::new(AtomicU64::new(0)),
            inserts_rejected_total: Arc::new(AtomicU64::new(0)),
            searches_total: Arc::new(AtomicU64::new(0)),
            search_misses_total: Arc::new(AtomicU64::new(0)),
            deletes_total: Arc::new(AtomicU64::new(0)),
            lists_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record the outcome of an insert.
    pub fn record_insert(&self, accepted: bool) {
        if accepted {
            self.inserts_total.fetch_add(1, Ordering::Relaxed);
        } else {
            self.inserts_rejected_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a search and whether it found a contact.
    pub fn record_search(&self, hit: bool) {
        self.searches_total.fetch_add(1, Ordering::Relaxed);
        if !hit {
            self.search_misses_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a successful delete.
    pub fn record_delete(&self) {
        self.deletes_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a list snapshot.
    pub fn record_list(&self) {
        self.lists_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inserts_total(&self) -> u64 {
        self.inserts_total.load(Ordering::Relaxed)
    }

    pub fn inserts_rejected_total(&self) -> u64 {
        self.inserts_rejected_total.load(Ordering::Relaxed)
    }

    pub fn searches_total(&self) -> u64 {
        self.searches_total.load(Ordering::Relaxed)
    }

    pub fn search_misses_total(&self) -> u64 {
        self.search_misses_total.load(Ordering::Relaxed)
    }

    pub fn deletes_total(&self) -> u64 {
        self.deletes_total.load(Ordering::Relaxed)
    }

    pub fn lists_total(&self) -> u64 {
        self.lists_total.load(Ordering::Relaxed)
    }

    /// Fraction of searches that found a contact, 0.0 when nothing was searched.
    pub fn search_hit_rate(&self) -> f64 {
        let total = self.searches_total();
        if total == 0 {
            0.0
        } else {
            total.saturating_sub(self.search_misses_total()) as f64 / total as f64
        }
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.inserts_total.store(0, Ordering::Relaxed);
        self.inserts_rejected_total.store(0, Ordering::Relaxed);
        self.searches_total.store(0, Ordering::Relaxed);
        self.search_misses_total.store(0, Ordering::Relaxed);
        self.deletes_total.store(0, Ordering::Relaxed);
        self.lists_total.store(0, Ordering::Relaxed);
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            inserts_total: self.inserts_total(),
            inserts_rejected_total: self.inserts_rejected_total(),
            searches_total: self.searches_total(),
            search_misses_total: self.search_misses_total(),
            search_hit_rate: self.search_hit_rate(),
            deletes_total: self.deletes_total(),
            lists_total: self.lists_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub inserts_total: u64,
    pub inserts_rejected_total: u64,
    pub searches_total: u64,
    pub search_misses_total: u64,
    pub search_hit_rate: f64,
    pub deletes_total: u64,
    pub lists_total: u64,
}
