//! # Count-by-Status Breakdown
//!
//! One generic breakdown works for every status machine — the dashboard
//! tabs ("Pending (2)", "Approved (4)", …) are all instances of it.

use std::collections::HashMap;
use std::hash::Hash;

use muni_state::Lifecycle;

/// Counts per status for one entity kind.
#[derive(Debug, Clone)]
pub struct StatusBreakdown<S: Lifecycle + Hash> {
    counts: HashMap<S, usize>,
    total: usize,
}

impl<S: Lifecycle + Hash> StatusBreakdown<S> {
    /// Number of records currently in `status`.
    pub fn count(&self, status: S) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    /// Total number of records counted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of records in a terminal status.
    pub fn terminal(&self) -> usize {
        self.counts
            .iter()
            .filter(|(status, _)| status.is_terminal())
            .map(|(_, n)| n)
            .sum()
    }
}

/// Count statuses from any iterator (typically a mapped record slice).
pub fn breakdown<S: Lifecycle + Hash>(
    statuses: impl IntoIterator<Item = S>,
) -> StatusBreakdown<S> {
    let mut counts = HashMap::new();
    let mut total = 0;
    for status in statuses {
        *counts.entry(status).or_insert(0) += 1;
        total += 1;
    }
    StatusBreakdown { counts, total }
}
