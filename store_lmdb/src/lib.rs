//! LMDB storage backend for ballotbox.
//!
//! Implements [`ballotbox_store::TallyStore`] using the `heed` LMDB
//! bindings. All poll records live in a single named database of UTF-8
//! keys and values.

pub mod error;
pub mod store;

pub use error::LmdbError;
pub use store::LmdbTallyStore;
