use ballotbox_store::StoreError;
use ballotbox_types::PollId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    /// The device already holds a vote for this poll. Expected and
    /// recoverable; callers surface the previous pick instead of failing.
    #[error("already voted in poll {poll}")]
    AlreadyVoted { poll: PollId },

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}
