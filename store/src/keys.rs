//! Persisted key schema.
//!
//! Three records per poll, all namespaced under the poll identifier:
//!
//! - `counts:vote:first` holds the JSON tally object (candidate name to count)
//! - `voted:vote:first` holds the `"1"` sentinel while the device has voted
//! - `last:vote:first` holds the JSON `{name, at}` record of the latest commit

use ballotbox_types::PollId;

/// Value stored under a voted key once a commit succeeds.
pub const VOTED_SENTINEL: &str = "1";

/// Prefixes a full reset is allowed to touch. Deliberately scoped so a
/// reset cannot clobber keys owned by other features sharing the store.
pub const RESET_PREFIXES: [&str; 3] = ["counts:vote:", "voted:vote:", "last:vote:"];

/// Key holding the tally for `poll`.
pub fn counts_key(poll: PollId) -> String {
    format!("counts:{}", poll.namespace())
}

/// Key holding the voted flag for `poll`.
pub fn voted_key(poll: PollId) -> String {
    format!("voted:{}", poll.namespace())
}

/// Key holding the last-vote record for `poll`.
pub fn last_key(poll: PollId) -> String {
    format!("last:{}", poll.namespace())
}
