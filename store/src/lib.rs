//! Abstract storage trait for ballotbox.
//!
//! Every storage backend (LMDB, in-memory for testing) implements
//! [`TallyStore`]. The rest of the codebase depends only on the trait.

pub mod error;
pub mod keys;
pub mod tally_store;

pub use error::StoreError;
pub use tally_store::TallyStore;
