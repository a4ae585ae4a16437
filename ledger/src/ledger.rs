//! Domain operations over the tally store.

use ballotbox_store::keys::{
    counts_key, last_key, voted_key, RESET_PREFIXES, VOTED_SENTINEL,
};
use ballotbox_store::{StoreError, TallyStore};
use ballotbox_types::{LastVote, PollId, Tally, Timestamp};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::LedgerError;

/// Vote ledger over any [`TallyStore`] backend.
///
/// Reads are total: a missing, unreadable, or malformed record is treated
/// as absent and logged, never propagated. The one failure that does
/// propagate is a storage write during [`VoteLedger::commit_vote`], which
/// aborts the commit with nothing applied.
pub struct VoteLedger<S> {
    store: S,
}

impl<S: TallyStore> VoteLedger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Decoded tally for `poll`; empty when nothing valid is stored.
    pub fn get_counts(&self, poll: PollId) -> Tally {
        self.read_json(&counts_key(poll)).unwrap_or_default()
    }

    /// Total votes recorded for `poll`.
    pub fn get_total(&self, poll: PollId) -> u64 {
        self.get_counts(poll).total()
    }

    /// Whether this device already committed a vote for `poll`.
    pub fn has_voted(&self, poll: PollId) -> bool {
        match self.store.read(&voted_key(poll)) {
            Ok(value) => value.as_deref() == Some(VOTED_SENTINEL),
            Err(e) => {
                tracing::warn!(%poll, error = %e, "voted-flag read failed; treating as unvoted");
                false
            }
        }
    }

    /// The most recent commit for `poll`, if one is recorded.
    pub fn get_last_vote(&self, poll: PollId) -> Option<LastVote> {
        self.read_json(&last_key(poll))
    }

    /// Record one vote for `candidate` in `poll`.
    ///
    /// Fails with [`LedgerError::AlreadyVoted`] when the voted flag is
    /// already set, without touching the store. Otherwise the incremented
    /// tally, the voted flag, and the last-vote record land in a single
    /// atomic write; a storage failure aborts all three.
    ///
    /// Check-then-act: a second process sharing the same store can pass the
    /// flag check before either write lands and double-count this device.
    /// Accepted for a device-local gate; a single serialized caller cannot
    /// double-vote.
    pub fn commit_vote(
        &self,
        poll: PollId,
        candidate: &str,
        now: Timestamp,
    ) -> Result<(), LedgerError> {
        if self.has_voted(poll) {
            return Err(LedgerError::AlreadyVoted { poll });
        }

        let mut counts = self.get_counts(poll);
        counts.increment(candidate);
        let last = LastVote::new(candidate, now);

        let entries = vec![
            (counts_key(poll), encode(&counts)?),
            (voted_key(poll), VOTED_SENTINEL.to_string()),
            (last_key(poll), encode(&last)?),
        ];
        self.store.write_many(&entries)?;

        tracing::debug!(%poll, candidate, "vote committed");
        Ok(())
    }

    /// Clear every counts/voted/last-vote record across both polls.
    /// Keys outside the poll namespace are untouched.
    pub fn reset_all(&self) -> Result<usize, StoreError> {
        let removed = self.store.delete_matching(&RESET_PREFIXES)?;
        tracing::info!(removed, "cleared all poll data");
        Ok(removed)
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.read(key) {
            Ok(value) => value?,
            Err(e) => {
                tracing::warn!(key, error = %e, "store read failed; treating as absent");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "malformed stored value; treating as absent");
                None
            }
        }
    }
}

fn encode<T: Serialize>(value: &T) -> Result<String, LedgerError> {
    serde_json::to_string(value)
        .map_err(|e| LedgerError::Storage(StoreError::Backend(format!("encode failed: {e}"))))
}
