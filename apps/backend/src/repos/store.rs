//! Key-value persistence for whole-object JSON blobs.
//!
//! Every stored value is one JSON document under a fixed string key. Typed
//! accessors live in the sibling modules; this layer only moves strings.

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs4::fs_std::FileExt;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::errors::domain::{DomainError, InfraErrorKind};

/// Blob store injected into repos and services.
pub trait KeyValueStore: Send + Sync {
    /// Raw JSON for `key`, or `None` if nothing was ever saved.
    fn load_raw(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Replace the value under `key`.
    fn save_raw(&self, key: &str, json: &str) -> Result<(), DomainError>;
}

/// Process-local store; used by tests and when no data dir is configured.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn save_raw(&self, key: &str, json: &str) -> Result<(), DomainError> {
        self.entries.write().insert(key.to_owned(), json.to_owned());
        Ok(())
    }
}

const LOCK_FILE: &str = ".scorebook.lock";

/// One JSON file per key under a data directory.
///
/// Writes go to a temp file and are renamed into place while holding an
/// exclusive lock on `<dir>/.scorebook.lock`, so concurrent processes never
/// observe a half-written document.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, DomainError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| {
            DomainError::infra(
                InfraErrorKind::StoreUnavailable,
                format!("failed to create data dir {}: {e}", dir.display()),
            )
        })?;
        info!(data_dir = %dir.display(), "file store opened");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name for a key; anything outside `[A-Za-z0-9_-]` becomes `_`.
    fn path_for(&self, key: &str) -> PathBuf {
        let file: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{file}.json"))
    }
}

fn unavailable(action: &str, path: &Path, err: std::io::Error) -> DomainError {
    DomainError::infra(
        InfraErrorKind::StoreUnavailable,
        format!("failed to {action} {}: {err}", path.display()),
    )
}

impl KeyValueStore for FileStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>, DomainError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(json) => Ok(Some(json)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(unavailable("read", &path, e)),
        }
    }

    fn save_raw(&self, key: &str, json: &str) -> Result<(), DomainError> {
        let lock_path = self.dir.join(LOCK_FILE);
        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(&lock_path)
            .map_err(|e| unavailable("open lock file", &lock_path, e))?;
        FileExt::lock_exclusive(&lock).map_err(|e| unavailable("lock", &lock_path, e))?;

        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        let result = (|| {
            let mut file = fs::File::create(&tmp).map_err(|e| unavailable("create", &tmp, e))?;
            file.write_all(json.as_bytes())
                .and_then(|()| file.sync_all())
                .map_err(|e| unavailable("write", &tmp, e))?;
            fs::rename(&tmp, &path).map_err(|e| unavailable("rename", &path, e))
        })();

        if let Err(e) = FileExt::unlock(&lock) {
            debug!(error = %e, lock_path = %lock_path.display(), "unlock returned error");
        }
        result?;
        debug!(key, bytes = json.len(), "value saved");
        Ok(())
    }
}

/// Load and decode `key`. A value that no longer parses is reported as
/// `DataCorruption` rather than silently replaced.
pub fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, DomainError> {
    let Some(raw) = store.load_raw(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw).map(Some).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("stored value for '{key}' is not valid: {e}"),
        )
    })
}

pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), DomainError> {
    let json = serde_json::to_string(value).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::Other("serialize".into()),
            format!("failed to encode '{key}': {e}"),
        )
    })?;
    store.save_raw(key, &json)
}

/// Load `key`, writing `seed()` on the very first read.
///
/// A failed seed write is logged and the defaults are still returned; the
/// next read tries the write again.
pub fn load_or_seed<T, F>(store: &dyn KeyValueStore, key: &str, seed: F) -> Result<T, DomainError>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> T,
{
    if let Some(value) = load_json(store, key)? {
        return Ok(value);
    }
    let value = seed();
    match save_json(store, key, &value) {
        Ok(()) => info!(key, "seeded defaults"),
        Err(e) => warn!(key, error = %e, "could not store seeded defaults"),
    }
    Ok(value)
}
