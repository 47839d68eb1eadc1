//! Persistence backends for the filesystem blob.
//!
//! The whole mapping is saved as one serialized record after every mutating
//! command. A failed save is reported as a warning line and the in-memory
//! state is kept (accepted lossy-durability policy).

use async_trait::async_trait;
use std::io;
use std::path::PathBuf;
use std::sync::RwLock;

use tokio::fs;

/// Abstract whole-blob storage.
///
/// `load` returns `Ok(None)` when no state has ever been saved, which the
/// session treats as a fresh start rather than an error.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Read the persisted blob, if any.
    async fn load(&self) -> io::Result<Option<String>>;

    /// Replace the persisted blob with `blob`.
    async fn save(&self, blob: &str) -> io::Result<()>;
}

/// File-backed store: one JSON file, written whole.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store at an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The default store location, `$XDG_DATA_HOME/flatsh/fs.json`.
    pub fn default_location() -> Self {
        Self::new(crate::paths::state_file())
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl StateStore for FileStore {
    async fn load(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn save(&self, blob: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, blob).await
    }
}

/// In-memory store. Used by tests and `-c` one-shot mode.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: RwLock<Option<String>>,
}

impl MemoryStore {
    /// Create an empty store (no persisted state).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a blob.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: RwLock::new(Some(blob.into())),
        }
    }

    /// The currently held blob, if any.
    pub fn blob(&self) -> Option<String> {
        self.blob.read().ok().and_then(|b| b.clone())
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn load(&self) -> io::Result<Option<String>> {
        self.blob
            .read()
            .map(|b| b.clone())
            .map_err(|_| io::Error::other("lock poisoned"))
    }

    async fn save(&self, blob: &str) -> io::Result<()> {
        let mut slot = self
            .blob
            .write()
            .map_err(|_| io::Error::other("lock poisoned"))?;
        *slot = Some(blob.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn temp_file() -> PathBuf {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        env::temp_dir()
            .join(format!("flatsh-test-{}-{}", std::process::id(), id))
            .join("fs.json")
    }

    #[tokio::test]
    async fn file_store_load_missing_is_none() {
        let store = FileStore::new(temp_file());
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn file_store_save_creates_parents_and_round_trips() {
        let path = temp_file();
        let store = FileStore::new(&path);
        store.save(r#"{"/":{"type":"dir"}}"#).await.unwrap();
        assert_eq!(
            store.load().await.unwrap().as_deref(),
            Some(r#"{"/":{"type":"dir"}}"#)
        );
        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[tokio::test]
    async fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert_eq!(store.load().await.unwrap(), None);
        store.save("blob").await.unwrap();
        assert_eq!(store.load().await.unwrap().as_deref(), Some("blob"));
    }
}
