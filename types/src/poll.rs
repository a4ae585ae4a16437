//! Poll identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two fixed ballots. The set is known at startup and never grows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PollId {
    First,
    Second,
}

impl PollId {
    /// Every poll, in display order.
    pub const ALL: [PollId; 2] = [PollId::First, PollId::Second];

    /// Storage namespace for this poll. Persisted keys are built from this,
    /// e.g. `counts:vote:first`.
    pub fn namespace(&self) -> &'static str {
        match self {
            PollId::First => "vote:first",
            PollId::Second => "vote:second",
        }
    }
}

impl fmt::Display for PollId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PollId::First => write!(f, "first"),
            PollId::Second => write!(f, "second"),
        }
    }
}
