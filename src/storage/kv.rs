//! Key/value persistence for dashboard records
//!
//! Directory structure:
//! ```text
//! {data-dir}/
//! ├── ielts_decks.json    # Array of decks
//! ├── user_stats.json     # UserStats record
//! └── user_targets.json   # UserTargets record
//! ```

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

pub const DECKS_KEY: &str = "ielts_decks";
pub const USER_STATS_KEY: &str = "user_stats";
pub const USER_TARGETS_KEY: &str = "user_targets";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("Deck not found: {0}")]
    DeckNotFound(String),

    #[error("Data directory not found")]
    DataDirNotFound,

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// A string-keyed store of JSON documents.
///
/// Implementors only move raw strings; the typed `load_or`/`save` helpers
/// handle serialization.
pub trait KeyValueStore {
    /// Raw value for `key`, `None` when unset
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value for `key`
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`; removing an unset key is not an error
    fn remove(&self, key: &str) -> Result<()>;

    /// Read and parse `key`, falling back to `default` when the value is
    /// missing, unreadable or malformed. Never fails.
    fn load_or<T>(&self, key: &str, default: T) -> T
    where
        T: DeserializeOwned,
        Self: Sized,
    {
        let raw = match self.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                log::warn!("Failed to read {}: {}; using default", key, e);
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Stored {} is malformed: {}; using default", key, e);
                default
            }
        }
    }

    /// Serialize `value` and overwrite `key`
    fn save<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
        Self: Sized,
    {
        let json = serde_json::to_string_pretty(value)?;
        self.write(key, &json)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Keys become file names, so only allow a safe character set
fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// One JSON file per key inside a data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Default data directory (e.g., ~/.local/share/nova)
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("nova"))
            .ok_or(StorageError::DataDirNotFound)
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Create the data directory if needed
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        Ok(())
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.base_path.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Atomic write: write to a unique .tmp file then rename over the target
    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        self.init()?;
        let tmp_path = path.with_extension(format!("json.{}.tmp", Uuid::new_v4().simple()));
        fs::write(&tmp_path, value)?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        log::debug!("Wrote {} ({} bytes)", path.display(), value.len());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Process-local store; nothing survives the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{UserStats, UserTargets};
    use tempfile::TempDir;

    fn create_test_store() -> (FileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("data"));
        (store, temp_dir)
    }

    #[test]
    fn test_unset_key_yields_default() {
        let (store, _temp) = create_test_store();
        let targets = store.load_or(USER_TARGETS_KEY, UserTargets::default());
        assert_eq!(targets, UserTargets::default());
        assert!(store.read(USER_TARGETS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_stats_round_trip() {
        let (store, _temp) = create_test_store();
        let stats = UserStats {
            streak: 12,
            total_mastered: 340,
            estimated_band: 7.0,
            study_minutes: 610,
            weekly_goal: 5,
        };
        store.save(USER_STATS_KEY, &stats).unwrap();

        let loaded = store.load_or(USER_STATS_KEY, UserStats::default());
        assert_eq!(loaded, stats);
        assert!(store.base_path().join("user_stats.json").exists());
    }

    #[test]
    fn test_malformed_value_yields_default() {
        let (store, _temp) = create_test_store();
        store.write(USER_STATS_KEY, "{not json").unwrap();
        let stats = store.load_or(USER_STATS_KEY, UserStats::default());
        assert_eq!(stats, UserStats::default());

        store.write(USER_STATS_KEY, r#"{"streak":"many"}"#).unwrap();
        let stats = store.load_or(USER_STATS_KEY, UserStats::default());
        assert_eq!(stats, UserStats::default());
    }

    #[test]
    fn test_write_overwrites_and_leaves_no_tmp() {
        let (store, _temp) = create_test_store();
        store.save(USER_STATS_KEY, &UserStats::default()).unwrap();
        let updated = UserStats {
            streak: 4,
            ..UserStats::default()
        };
        store.save(USER_STATS_KEY, &updated).unwrap();

        assert_eq!(store.load_or(USER_STATS_KEY, UserStats::default()).streak, 4);
        let leftovers = fs::read_dir(store.base_path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn test_remove_key() {
        let (store, _temp) = create_test_store();
        store.save(USER_TARGETS_KEY, &UserTargets::default()).unwrap();
        store.remove(USER_TARGETS_KEY).unwrap();
        assert!(store.read(USER_TARGETS_KEY).unwrap().is_none());
        // removing twice is fine
        store.remove(USER_TARGETS_KEY).unwrap();
    }

    #[test]
    fn test_invalid_keys_rejected() {
        let (store, _temp) = create_test_store();
        assert!(matches!(store.write("../escape", "{}"), Err(StorageError::InvalidKey(_))));
        assert!(matches!(store.read(""), Err(StorageError::InvalidKey(_))));
        // load_or still never fails
        assert_eq!(store.load_or("a/b", 5u32), 5);
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.load_or(USER_STATS_KEY, UserStats::default()), UserStats::default());
        let stats = UserStats {
            estimated_band: 8.0,
            ..UserStats::default()
        };
        store.save(USER_STATS_KEY, &stats).unwrap();
        assert_eq!(store.load_or(USER_STATS_KEY, UserStats::default()), stats);
        store.remove(USER_STATS_KEY).unwrap();
        assert!(store.read(USER_STATS_KEY).unwrap().is_none());
    }
}
