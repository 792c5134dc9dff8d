//! File-backed [`KeyValueStore`]: one file per key under a data directory.
//!
//! Writes go to a sibling temporary file which is then renamed over the
//! target, so a failed write leaves the previous blob intact.

use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::kv::KeyValueStore;

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `root`. The directory is created lazily on
    /// first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a key to its file. Keys are restricted to a filename-safe alphabet.
    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(StorageError::Backend(format!("invalid storage key '{key}'")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

fn io_error(key: &str, source: std::io::Error) -> StorageError {
    StorageError::Io {
        key: key.to_owned(),
        source,
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StorageError>> + Send {
        let key = key.to_owned();
        let path = self.path_for(&key);
        async move {
            let path = path?;
            match tokio::fs::read_to_string(&path).await {
                Ok(content) => Ok(Some(content)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(io_error(&key, e)),
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<(), StorageError>> + Send {
        let key = key.to_owned();
        let value = value.to_owned();
        let root = self.root.clone();
        let path = self.path_for(&key);
        async move {
            let path = path?;
            tokio::fs::create_dir_all(&root)
                .await
                .map_err(|e| io_error(&key, e))?;

            let tmp = path.with_extension("json.tmp");
            if let Err(e) = tokio::fs::write(&tmp, value.as_bytes()).await {
                let _ = tokio::fs::remove_file(&tmp).await;
                return Err(io_error(&key, e));
            }
            if let Err(e) = tokio::fs::rename(&tmp, &path).await {
                let _ = tokio::fs::remove_file(&tmp).await;
                return Err(io_error(&key, e));
            }

            tracing::debug!(key = %key, bytes = value.len(), "persisted key");
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> impl Future<Output = Result<(), StorageError>> + Send {
        let key = key.to_owned();
        let path = self.path_for(&key);
        async move {
            let path = path?;
            match tokio::fs::remove_file(&path).await {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(io_error(&key, e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_before_any_write_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("favorites").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_creates_directory_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("data");
        let store = FileStore::new(&root);

        store.set("favorites", "[1]").await.unwrap();

        assert!(root.join("favorites.json").exists());
        assert!(!root.join("favorites.json.tmp").exists());
        assert_eq!(store.get("favorites").await.unwrap().as_deref(), Some("[1]"));
    }

    #[tokio::test]
    async fn separate_instances_see_the_same_data() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileStore::new(dir.path());
        let reader = FileStore::new(dir.path());

        writer.set("favorites", "[]").await.unwrap();
        assert_eq!(reader.get("favorites").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn remove_deletes_file_and_tolerates_absent_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.set("favorites", "[]").await.unwrap();

        store.remove("favorites").await.unwrap();
        assert_eq!(store.get("favorites").await.unwrap(), None);
        store.remove("favorites").await.unwrap();
    }

    #[tokio::test]
    async fn rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        for key in ["", "../escape", ".hidden", "a/b"] {
            let result = store.set(key, "x").await;
            assert!(
                matches!(result, Err(StorageError::Backend(_))),
                "expected key {key:?} to be rejected, got: {result:?}"
            );
        }
    }

    #[tokio::test]
    async fn write_into_unwritable_root_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "not a directory").unwrap();
        let store = FileStore::new(blocker.join("data"));

        let result = store.set("favorites", "[]").await;
        assert!(
            matches!(result, Err(StorageError::Io { .. })),
            "got: {result:?}"
        );
    }

    #[tokio::test]
    async fn failed_rename_removes_temp_file_and_keeps_target() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("favorites.json");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep"), "occupied").unwrap();
        let store = FileStore::new(dir.path());

        let result = store.set("favorites", "[]").await;

        assert!(
            matches!(result, Err(StorageError::Io { .. })),
            "got: {result:?}"
        );
        assert!(!dir.path().join("favorites.json.tmp").exists());
        assert!(target.join("keep").exists());
    }
}
