//! LMDB implementation of the tally store.

use std::path::Path;

use heed::types::Str;
use heed::{Database, Env, EnvOpenOptions};

use ballotbox_store::{StoreError, TallyStore};

use crate::LmdbError;

const DB_NAME: &str = "tally";

/// 10 MiB is generous for three small records per poll; hitting the map
/// limit surfaces as [`StoreError::Full`], which aborts the active commit.
const MAP_SIZE: usize = 10 * 1024 * 1024;

/// Persistent tally store backed by a single LMDB database.
pub struct LmdbTallyStore {
    env: Env,
    db: Database<Str, Str>,
}

impl LmdbTallyStore {
    /// Open or create the store under `path` (a directory).
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        std::fs::create_dir_all(path).map_err(LmdbError::from)?;
        // Safety: the environment is opened on a plain directory that no
        // other environment in this process points at.
        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(MAP_SIZE)
                .max_dbs(1)
                .open(path)
        }
        .map_err(LmdbError::from)?;

        let mut wtxn = env.write_txn().map_err(LmdbError::from)?;
        let db = env
            .create_database(&mut wtxn, Some(DB_NAME))
            .map_err(LmdbError::from)?;
        wtxn.commit().map_err(LmdbError::from)?;

        tracing::debug!(path = %path.display(), "opened LMDB tally store");
        Ok(Self { env, db })
    }
}

impl TallyStore for LmdbTallyStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let rtxn = self.env.read_txn().map_err(LmdbError::from)?;
        let value = self.db.get(&rtxn, key).map_err(LmdbError::from)?;
        Ok(value.map(str::to_string))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut wtxn = self.env.write_txn().map_err(LmdbError::from)?;
        self.db.put(&mut wtxn, key, value).map_err(LmdbError::from)?;
        wtxn.commit().map_err(LmdbError::from)?;
        Ok(())
    }

    fn write_many(&self, entries: &[(String, String)]) -> Result<(), StoreError> {
        // One write transaction: if any put fails, the transaction is
        // dropped uncommitted and nothing becomes visible.
        let mut wtxn = self.env.write_txn().map_err(LmdbError::from)?;
        for (key, value) in entries {
            self.db
                .put(&mut wtxn, key, value)
                .map_err(LmdbError::from)?;
        }
        wtxn.commit().map_err(LmdbError::from)?;
        Ok(())
    }

    fn delete_matching(&self, prefixes: &[&str]) -> Result<usize, StoreError> {
        let mut wtxn = self.env.write_txn().map_err(LmdbError::from)?;
        let mut removed = 0;
        for prefix in prefixes {
            let keys: Vec<String> = self
                .db
                .prefix_iter(&wtxn, prefix)
                .map_err(LmdbError::from)?
                .map(|item| item.map(|(key, _)| key.to_string()))
                .collect::<Result<_, _>>()
                .map_err(LmdbError::from)?;
            for key in keys {
                if self.db.delete(&mut wtxn, &key).map_err(LmdbError::from)? {
                    removed += 1;
                }
            }
        }
        wtxn.commit().map_err(LmdbError::from)?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: open a store in a temporary directory.
    fn temp_store() -> (tempfile::TempDir, LmdbTallyStore) {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let store = LmdbTallyStore::open(dir.path()).expect("failed to open store");
        (dir, store)
    }

    #[test]
    fn read_missing_key_is_none() {
        let (_dir, store) = temp_store();
        assert!(store.read("counts:vote:first").unwrap().is_none());
    }

    #[test]
    fn write_then_read_roundtrip() {
        let (_dir, store) = temp_store();
        store.write("counts:vote:first", r#"{"Tanaka":1}"#).unwrap();
        assert_eq!(
            store.read("counts:vote:first").unwrap().as_deref(),
            Some(r#"{"Tanaka":1}"#)
        );
    }

    #[test]
    fn write_replaces_previous_value() {
        let (_dir, store) = temp_store();
        store.write("voted:vote:first", "0").unwrap();
        store.write("voted:vote:first", "1").unwrap();
        assert_eq!(store.read("voted:vote:first").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn write_many_makes_all_entries_visible() {
        let (_dir, store) = temp_store();
        store
            .write_many(&[
                ("counts:vote:first".to_string(), r#"{"Tanaka":1}"#.to_string()),
                ("voted:vote:first".to_string(), "1".to_string()),
                (
                    "last:vote:first".to_string(),
                    r#"{"name":"Tanaka","at":"2026-08-23T00:00:00Z"}"#.to_string(),
                ),
            ])
            .unwrap();

        assert!(store.read("counts:vote:first").unwrap().is_some());
        assert_eq!(store.read("voted:vote:first").unwrap().as_deref(), Some("1"));
        assert!(store.read("last:vote:first").unwrap().is_some());
    }

    #[test]
    fn delete_matching_removes_only_prefixed_keys() {
        let (_dir, store) = temp_store();
        store.write("counts:vote:first", "{}").unwrap();
        store.write("counts:vote:second", "{}").unwrap();
        store.write("voted:vote:first", "1").unwrap();
        store.write("last:vote:second", "{}").unwrap();
        store.write("theme", "dark").unwrap();

        let removed = store
            .delete_matching(&["counts:vote:", "voted:vote:", "last:vote:"])
            .unwrap();

        assert_eq!(removed, 4);
        assert!(store.read("counts:vote:first").unwrap().is_none());
        assert!(store.read("voted:vote:first").unwrap().is_none());
        assert!(store.read("last:vote:second").unwrap().is_none());
        // Out-of-namespace key survives.
        assert_eq!(store.read("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn data_survives_reopen() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        {
            let store = LmdbTallyStore::open(dir.path()).unwrap();
            store.write("voted:vote:second", "1").unwrap();
        }
        let store = LmdbTallyStore::open(dir.path()).unwrap();
        assert_eq!(
            store.read("voted:vote:second").unwrap().as_deref(),
            Some("1")
        );
    }
}
