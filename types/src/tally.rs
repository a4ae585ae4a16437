//! Per-poll candidate tallies.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from candidate name to vote count for a single poll.
///
/// Serializes as a flat JSON object (`{"Tanaka":3,"Sato":1}`), which is the
/// persisted wire format for `counts:vote:*` keys. Iteration order is not
/// meaningful; consumers rank by count via [`Tally::ranked`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tally(BTreeMap<String, u64>);

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct candidates with a recorded count.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Count for one candidate; absent candidates count zero.
    pub fn get(&self, name: &str) -> u64 {
        self.0.get(name).copied().unwrap_or(0)
    }

    /// Total votes across all candidates.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Add one vote to `name`, inserting it at zero first if unseen.
    pub fn increment(&mut self, name: &str) {
        *self.0.entry(name.to_string()).or_insert(0) += 1;
    }

    /// Candidates ranked by count, highest first. Equal counts keep the
    /// map's lexicographic order (the sort is stable).
    pub fn ranked(&self) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> =
            self.0.iter().map(|(n, c)| (n.clone(), *c)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}
