//! The informational record of a poll's most recent commit.

use crate::Timestamp;
use serde::{Deserialize, Serialize};

/// Written on every successful commit, cleared only by a full reset.
///
/// Persisted as a JSON object under `last:vote:*` keys. `at` is an ISO-8601
/// string rather than a numeric timestamp so the stored value is readable
/// as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastVote {
    /// Candidate the vote went to.
    pub name: String,
    /// When the vote was committed.
    pub at: String,
}

impl LastVote {
    pub fn new(name: impl Into<String>, at: Timestamp) -> Self {
        Self {
            name: name.into(),
            at: at.to_rfc3339(),
        }
    }
}
