//! File-backed store backend: one JSON file per key.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{KeyValueStore, StoreError};

/// A [`KeyValueStore`] that keeps each key in its own file under a base
/// directory.
///
/// Keys like `"@player_sessions"` contain characters that are awkward
/// in filenames, so they are sanitized (every character outside
/// `[A-Za-z0-9._-]` becomes `_`) and suffixed with `.json`. The keys
/// this workspace uses are a small fixed set, so sanitized names cannot
/// collide.
///
/// Writes go to a temp file first and are renamed into place, so a
/// reader never observes a half-written blob — at worst it sees the
/// previous value.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens (and creates, if needed) a store rooted at `dir`.
    ///
    /// # Errors
    /// Returns [`StoreError::Unavailable`] if the directory cannot be
    /// created — without it, every later operation would fail anyway.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await.map_err(|e| {
            StoreError::Unavailable(format!(
                "cannot create store directory {}: {e}",
                dir.display()
            ))
        })?;
        tracing::debug!(dir = %dir.display(), "file store opened");
        Ok(Self { dir })
    }

    /// The directory this store persists into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Read {
                key: key.to_string(),
                source: e,
            }),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        let write = async {
            fs::write(&tmp, value).await?;
            fs::rename(&tmp, &path).await
        };
        write.await.map_err(|e| StoreError::Write {
            key: key.to_string(),
            source: e,
        })
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Remove {
                key: key.to_string(),
                source: e,
            }),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicU64, Ordering};

    static DIR_SEQ: AtomicU64 = AtomicU64::new(0);

    /// A fresh directory per test so tests don't see each other's files.
    fn test_dir() -> PathBuf {
        std::env::temp_dir().join(format!(
            "snaprally-store-test-{}-{}",
            std::process::id(),
            DIR_SEQ.fetch_add(1, Ordering::Relaxed),
        ))
    }

    #[tokio::test]
    async fn test_get_missing_key_returns_none() {
        let store = FileStore::open(test_dir()).await.unwrap();
        assert_eq!(store.get("@player_sessions").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let store = FileStore::open(test_dir()).await.unwrap();
        store.set("@player_sessions", "[]").await.unwrap();
        assert_eq!(
            store.get("@player_sessions").await.unwrap().as_deref(),
            Some("[]")
        );
    }

    #[tokio::test]
    async fn test_value_survives_reopen() {
        // The point of the file backend: data outlives the handle.
        let dir = test_dir();
        {
            let store = FileStore::open(&dir).await.unwrap();
            store.set("@owner_events", r#"[{"eventId":"e1"}]"#).await.unwrap();
        }
        let store = FileStore::open(&dir).await.unwrap();
        assert_eq!(
            store.get("@owner_events").await.unwrap().as_deref(),
            Some(r#"[{"eventId":"e1"}]"#)
        );
    }

    #[tokio::test]
    async fn test_remove_missing_key_succeeds() {
        let store = FileStore::open(test_dir()).await.unwrap();
        assert!(store.remove("@photo_reactions").await.is_ok());
    }

    #[tokio::test]
    async fn test_remove_deletes_value() {
        let store = FileStore::open(test_dir()).await.unwrap();
        store.set("k", "v").await.unwrap();
        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_keys_with_special_characters_are_distinct_files() {
        let store = FileStore::open(test_dir()).await.unwrap();
        store.set("@player_sessions", "a").await.unwrap();
        store.set("@owner_events", "b").await.unwrap();
        assert_eq!(
            store.get("@player_sessions").await.unwrap().as_deref(),
            Some("a")
        );
        assert_eq!(
            store.get("@owner_events").await.unwrap().as_deref(),
            Some("b")
        );
    }

    #[tokio::test]
    async fn test_set_replaces_whole_value() {
        let store = FileStore::open(test_dir()).await.unwrap();
        store.set("k", "a long initial value").await.unwrap();
        store.set("k", "short").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("short"));
    }
}
