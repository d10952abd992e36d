use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use boli_types::LanguageCode;

use crate::error::StoreError;

/// Every key the app persists. Per-language data is namespaced by the
/// variant, never by callers gluing strings together.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StorageKey {
    SavedPhrases(LanguageCode),
    SelectedLanguage,
}

impl StorageKey {
    pub fn as_key(&self) -> String {
        match self {
            StorageKey::SavedPhrases(code) => format!("savedPhrases_{code}"),
            StorageKey::SelectedLanguage => "selectedLanguage".to_string(),
        }
    }
}

/// Synchronous local key-value storage
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &StorageKey) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &StorageKey, value: &str) -> Result<(), StoreError>;

    fn remove(&self, key: &StorageKey) -> Result<(), StoreError>;
}

/// Process-local store, nothing survives a restart
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &StorageKey) -> Result<Option<String>, StoreError> {
        let values = self.values.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(values.get(&key.as_key()).cloned())
    }

    fn set(&self, key: &StorageKey, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.write().map_err(|_| StoreError::LockPoisoned)?;
        values.insert(key.as_key(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &StorageKey) -> Result<(), StoreError> {
        let mut values = self.values.write().map_err(|_| StoreError::LockPoisoned)?;
        values.remove(&key.as_key());
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &StorageKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_key()))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &StorageKey) -> Result<Option<String>, StoreError> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&self, key: &StorageKey, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &StorageKey) -> Result<(), StoreError> {
        let path = self.path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
