//! Fundamental types for ballotbox.
//!
//! This crate defines the types shared across every other crate in the
//! workspace: poll identifiers, tallies, the last-vote record, and timestamps.

pub mod last_vote;
pub mod poll;
pub mod tally;
pub mod time;

pub use last_vote::LastVote;
pub use poll::PollId;
pub use tally::Tally;
pub use time::Timestamp;
