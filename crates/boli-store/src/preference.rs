use std::sync::Arc;

use boli_types::LanguageCode;

use crate::error::StoreError;
use crate::keyed::{KeyValueStore, StorageKey};

/// Remembers which language the user picked last
pub struct LanguagePreference {
    store: Arc<dyn KeyValueStore>,
}

impl LanguagePreference {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Values are JSON strings; a bare code is accepted as well
    pub fn load(&self) -> Option<LanguageCode> {
        let raw = match self.store.get(&StorageKey::SelectedLanguage) {
            Ok(value) => value?,
            Err(e) => {
                tracing::warn!("Failed to read selected language: {}", e);
                return None;
            }
        };

        let code = serde_json::from_str::<String>(&raw)
            .unwrap_or_else(|_| raw.trim().to_string());
        if code.is_empty() {
            return None;
        }
        Some(LanguageCode::from(code))
    }

    pub fn save(&self, code: &LanguageCode) -> Result<(), StoreError> {
        let value = serde_json::to_string(code)?;
        self.store.set(&StorageKey::SelectedLanguage, &value)
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(&StorageKey::SelectedLanguage)
    }
}
