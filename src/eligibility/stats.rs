//! Eligibility Statistics Module
//!
//! Tracks how eligibility reads were answered: from the cache, by
//! recomputation, or refused.

use serde::Serialize;

// == Eligibility Stats ==
/// Counters for eligibility reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EligibilityStats {
    /// Reads answered from a fresh cached set
    pub hits: u64,
    /// Reads that recomputed and persisted the set
    pub misses: u64,
    /// Reads refused because a birthday passed since criteria selection
    pub stale_rejections: u64,
    /// Reads for an unknown user
    pub not_found: u64,
}

impl EligibilityStats {
    // == Constructor ==
    /// Creates a new EligibilityStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if nothing was served yet.
    /// Refused reads do not count.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_stale(&mut self) {
        self.stale_rejections += 1;
    }

    pub fn record_not_found(&mut self) {
        self.not_found += 1;
    }
}
