//! Flat string key-value persistence, scoped to the local device.

use crate::StoreError;

/// Durable key-value storage for poll state.
///
/// Values are opaque strings; the ledger layer owns their interpretation.
/// A missing key is `Ok(None)`, never an error. Writes may fail when the
/// backend runs out of space; a failed write must leave prior state intact.
pub trait TallyStore {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Store every entry, atomically: either all entries become visible or
    /// none does.
    fn write_many(&self, entries: &[(String, String)]) -> Result<(), StoreError>;

    /// Delete every key starting with one of `prefixes`. Returns how many
    /// keys were removed. Keys outside the prefixes are never touched.
    fn delete_matching(&self, prefixes: &[&str]) -> Result<usize, StoreError>;
}
