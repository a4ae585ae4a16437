//! Nullable store: thread-safe in-memory storage for testing.

use ballotbox_store::{StoreError, TallyStore};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// An in-memory tally store for testing.
///
/// `fail_next_write` lets a test force the next mutation to fail the way a
/// full backend would, without partial effects.
pub struct NullTallyStore {
    entries: Mutex<HashMap<String, String>>,
    fail_next_write: AtomicBool,
}

impl NullTallyStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            fail_next_write: AtomicBool::new(false),
        }
    }

    /// Make the next `write` or `write_many` call fail with
    /// [`StoreError::Full`]. The store content is left untouched by the
    /// failed call.
    pub fn fail_next_write(&self) {
        self.fail_next_write.store(true, Ordering::SeqCst);
    }

    fn take_failure(&self) -> Result<(), StoreError> {
        if self.fail_next_write.swap(false, Ordering::SeqCst) {
            Err(StoreError::Full("injected write failure".to_string()))
        } else {
            Ok(())
        }
    }
}

impl Default for NullTallyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TallyStore for NullTallyStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.take_failure()?;
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn write_many(&self, entries: &[(String, String)]) -> Result<(), StoreError> {
        // Failure is checked before anything is applied, so a failed call
        // leaves the map exactly as it was.
        self.take_failure()?;
        let mut map = self.entries.lock().unwrap();
        for (key, value) in entries {
            map.insert(key.clone(), value.clone());
        }
        Ok(())
    }

    fn delete_matching(&self, prefixes: &[&str]) -> Result<usize, StoreError> {
        let mut map = self.entries.lock().unwrap();
        let before = map.len();
        map.retain(|key, _| !prefixes.iter().any(|p| key.starts_with(p)));
        Ok(before - map.len())
    }
}
