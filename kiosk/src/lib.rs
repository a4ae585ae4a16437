//! Vote intent resolver.
//!
//! Bridges a raw vote-trigger interaction to the ledger and the
//! confirmation dialog: extract and normalize the candidate name, branch on
//! whether the poll is already voted, and drive the confirm, commit, and
//! notify protocol.

pub mod kiosk;
pub mod name;
pub mod notifier;

pub use kiosk::VoteKiosk;
pub use name::{normalize_candidate, UNKNOWN_CANDIDATE};
pub use notifier::Notifier;
