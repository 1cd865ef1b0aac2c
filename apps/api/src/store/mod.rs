//! Flat-file JSON persistence. One document per store, one advisory lock
//! per store, whole-document rewrite on every mutation.
//!
//! Every operation follows the same sequence: acquire the store lock with a
//! bounded wait, read the full document, mutate in memory, write the full
//! document back pretty-printed. A missing or corrupt backing file reads as
//! the empty document instead of failing the request.

pub mod users;

use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tokio::sync::{Mutex, MutexGuard};
use tokio::time::timeout;
use tracing::warn;

use crate::errors::AppError;

/// A single JSON document guarded by one async lock. Clones share the lock,
/// so every handle serializes against the same backing file.
#[derive(Clone)]
pub struct JsonStore<T> {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
    lock_timeout: Duration,
    _doc: PhantomData<fn() -> T>,
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub fn new(path: PathBuf, lock_timeout: Duration) -> Self {
        JsonStore {
            path,
            lock: Arc::new(Mutex::new(())),
            lock_timeout,
            _doc: PhantomData,
        }
    }

    /// Acquires the store lock, waiting at most the configured timeout.
    /// File access goes through the returned guard, so a read-modify-write
    /// sequence stays serialized for as long as the guard lives.
    pub async fn lock(&self) -> Result<StoreGuard<'_, T>, AppError> {
        let guard = timeout(self.lock_timeout, self.lock.lock())
            .await
            .map_err(|_| AppError::LockTimeout)?;
        Ok(StoreGuard {
            _lock: guard,
            path: &self.path,
            _doc: PhantomData,
        })
    }

    /// Lock-then-load convenience for read-only callers.
    pub async fn read(&self) -> Result<T, AppError> {
        let guard = self.lock().await?;
        guard.load().await
    }
}

/// Exclusive access to the backing document while the store lock is held.
pub struct StoreGuard<'a, T> {
    _lock: MutexGuard<'a, ()>,
    path: &'a Path,
    _doc: PhantomData<fn() -> T>,
}

impl<T> StoreGuard<'_, T>
where
    T: Serialize + DeserializeOwned + Default,
{
    /// Whether the backing file exists yet.
    pub async fn exists(&self) -> Result<bool, AppError> {
        let exists = fs::try_exists(self.path)
            .await
            .with_context(|| format!("checking {}", self.path.display()))?;
        Ok(exists)
    }

    /// Reads the full document. Missing files and corrupt JSON both read as
    /// the empty document; corruption is logged and replaced on next store.
    pub async fn load(&self) -> Result<T, AppError> {
        let bytes = match fs::read(self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
            Err(e) => {
                return Err(AppError::Internal(
                    anyhow::Error::new(e).context(format!("reading {}", self.path.display())),
                ))
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(doc) => Ok(doc),
            Err(e) => {
                warn!(
                    "Corrupt store document {}: {e}; treating as empty",
                    self.path.display()
                );
                Ok(T::default())
            }
        }
    }

    /// Rewrites the whole document, pretty-printed.
    pub async fn store(&self, doc: &T) -> Result<(), AppError> {
        let bytes = serde_json::to_vec_pretty(doc).context("serializing store document")?;
        fs::write(self.path, bytes)
            .await
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use tempfile::TempDir;

    use super::*;

    type Doc = BTreeMap<String, String>;

    fn make_store(dir: &TempDir) -> JsonStore<Doc> {
        JsonStore::new(dir.path().join("doc.json"), Duration::from_millis(200))
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = make_store(&dir);
        assert!(store.read().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = make_store(&dir);
        let mut doc = Doc::new();
        doc.insert("alpha".to_string(), "one".to_string());
        doc.insert("beta".to_string(), "two".to_string());

        let guard = store.lock().await.unwrap();
        guard.store(&doc).await.unwrap();
        drop(guard);

        assert_eq!(store.read().await.unwrap(), doc);
    }

    #[tokio::test]
    async fn test_corrupt_document_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = make_store(&dir);
        fs::write(dir.path().join("doc.json"), b"{ not json at all")
            .await
            .unwrap();
        assert!(store.read().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_lock_timeout_surfaces_as_error() {
        let dir = TempDir::new().unwrap();
        let store = make_store(&dir);
        let _held = store.lock().await.unwrap();
        let err = store.lock().await.err();
        assert!(matches!(err, Some(AppError::LockTimeout)));
    }

    #[tokio::test]
    async fn test_document_written_pretty_printed() {
        let dir = TempDir::new().unwrap();
        let store = make_store(&dir);
        let mut doc = Doc::new();
        doc.insert("alpha".to_string(), "one".to_string());

        let guard = store.lock().await.unwrap();
        guard.store(&doc).await.unwrap();
        drop(guard);

        let on_disk = fs::read_to_string(dir.path().join("doc.json")).await.unwrap();
        assert!(on_disk.contains("\n  \"alpha\""));
    }

    #[tokio::test]
    async fn test_exists_tracks_backing_file() {
        let dir = TempDir::new().unwrap();
        let store = make_store(&dir);
        let guard = store.lock().await.unwrap();
        assert!(!guard.exists().await.unwrap());
        guard.store(&Doc::new()).await.unwrap();
        assert!(guard.exists().await.unwrap());
    }
}
