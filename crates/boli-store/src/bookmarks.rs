use std::sync::Arc;

use boli_types::{LanguageCode, PhraseEntry};

use crate::error::StoreError;
use crate::keyed::{KeyValueStore, StorageKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub added: bool,
}

/// Saved phrases of one language.
///
/// Bookmarks are identified by `target_text` alone, so two phrases with the
/// same translation share one bookmark. Every mutation is written through
/// before it is applied in memory; a failed write leaves the set untouched.
pub struct BookmarkStore {
    store: Arc<dyn KeyValueStore>,
    language: LanguageCode,
    saved: Vec<PhraseEntry>,
}

impl BookmarkStore {
    /// Open and load the saved phrases of `language`
    pub fn open(store: Arc<dyn KeyValueStore>, language: LanguageCode) -> Self {
        let mut bookmarks = Self {
            store,
            language: language.clone(),
            saved: Vec::new(),
        };
        bookmarks.load(&language);
        bookmarks
    }

    pub fn language(&self) -> &LanguageCode {
        &self.language
    }

    /// Saved phrases in the order they were saved
    pub fn saved(&self) -> &[PhraseEntry] {
        &self.saved
    }

    pub fn is_saved(&self, entry: &PhraseEntry) -> bool {
        self.contains(&entry.target_text)
    }

    pub fn contains(&self, target_text: &str) -> bool {
        self.saved.iter().any(|s| s.target_text == target_text)
    }

    /// Replace the in-memory set with what is stored for `language`.
    /// Missing or unreadable data loads as an empty set.
    pub fn load(&mut self, language: &LanguageCode) {
        let key = StorageKey::SavedPhrases(language.clone());

        let saved = match self.store.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<PhraseEntry>>(&raw) {
                Ok(entries) => dedup_by_target(entries),
                Err(e) => {
                    tracing::warn!("Discarding malformed saved phrases for {}: {}", language, e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read saved phrases for {}: {}", language, e);
                Vec::new()
            }
        };

        tracing::debug!("Loaded {} saved phrases for {}", saved.len(), language);
        self.language = language.clone();
        self.saved = saved;
    }

    /// Write the current set under `language`
    pub fn persist(&self, language: &LanguageCode) -> Result<(), StoreError> {
        self.write(language, &self.saved)
    }

    /// Remove the bookmark if present, else append it
    pub fn toggle_save(&mut self, entry: &PhraseEntry) -> Result<ToggleOutcome, StoreError> {
        let added = !self.is_saved(entry);

        let next: Vec<PhraseEntry> = if added {
            self.saved.iter().cloned().chain([entry.clone()]).collect()
        } else {
            self.saved
                .iter()
                .filter(|s| s.target_text != entry.target_text)
                .cloned()
                .collect()
        };

        self.write(&self.language, &next)?;
        self.saved = next;

        Ok(ToggleOutcome { added })
    }

    /// Remove by position in [`saved`](Self::saved)
    pub fn remove_at(&mut self, index: usize) -> Result<Option<PhraseEntry>, StoreError> {
        if index >= self.saved.len() {
            return Ok(None);
        }

        let mut next = self.saved.clone();
        let removed = next.remove(index);

        self.write(&self.language, &next)?;
        self.saved = next;

        Ok(Some(removed))
    }

    fn write(&self, language: &LanguageCode, entries: &[PhraseEntry]) -> Result<(), StoreError> {
        let json = serde_json::to_string(entries)?;
        self.store
            .set(&StorageKey::SavedPhrases(language.clone()), &json)
    }
}

fn dedup_by_target(entries: Vec<PhraseEntry>) -> Vec<PhraseEntry> {
    let mut unique: Vec<PhraseEntry> = Vec::with_capacity(entries.len());
    for entry in entries {
        if !unique.iter().any(|u| u.target_text == entry.target_text) {
            unique.push(entry);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyed::{JsonFileStore, MemoryStore};

    fn marathi() -> LanguageCode {
        LanguageCode::from("marathi")
    }

    fn hello() -> PhraseEntry {
        PhraseEntry::new("Hello / Hi", "नमस्कार", "Namaskār")
    }

    fn thanks() -> PhraseEntry {
        PhraseEntry::new("Thank you", "धन्यवाद", "Dhanyavād")
    }

    /// Store whose writes always fail
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &StorageKey) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn set(&self, _key: &StorageKey, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("read-only")))
        }

        fn remove(&self, _key: &StorageKey) -> Result<(), StoreError> {
            Ok(())
        }
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let store = Arc::new(MemoryStore::new());
        let mut bookmarks = BookmarkStore::open(store.clone(), marathi());
        bookmarks.toggle_save(&thanks()).unwrap();
        let before = bookmarks.saved().to_vec();

        assert_eq!(bookmarks.toggle_save(&hello()).unwrap(), ToggleOutcome { added: true });
        assert!(bookmarks.is_saved(&hello()));
        assert_eq!(bookmarks.toggle_save(&hello()).unwrap(), ToggleOutcome { added: false });
        assert!(!bookmarks.is_saved(&hello()));

        assert_eq!(bookmarks.saved(), before.as_slice());
    }

    #[test]
    fn test_append_order_is_save_order() {
        let store = Arc::new(MemoryStore::new());
        let mut bookmarks = BookmarkStore::open(store, marathi());
        bookmarks.toggle_save(&thanks()).unwrap();
        bookmarks.toggle_save(&hello()).unwrap();

        let targets: Vec<&str> = bookmarks.saved().iter().map(|s| s.target_text.as_str()).collect();
        assert_eq!(targets, vec!["धन्यवाद", "नमस्कार"]);
    }

    #[test]
    fn test_identical_translations_share_a_bookmark() {
        let store = Arc::new(MemoryStore::new());
        let mut bookmarks = BookmarkStore::open(store, marathi());
        bookmarks.toggle_save(&hello()).unwrap();

        let greeting = PhraseEntry::new("Greetings", "नमस्कार", "Namaskār");
        assert!(bookmarks.is_saved(&greeting));
        assert_eq!(bookmarks.toggle_save(&greeting).unwrap(), ToggleOutcome { added: false });
        assert!(bookmarks.saved().is_empty());
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let store = Arc::new(MemoryStore::new());
        let mut bookmarks = BookmarkStore::open(store.clone(), marathi());
        bookmarks.toggle_save(&hello()).unwrap();

        let reopened = BookmarkStore::open(store.clone(), marathi());
        assert_eq!(reopened.saved(), bookmarks.saved());

        bookmarks.remove_at(0).unwrap();
        let reopened = BookmarkStore::open(store, marathi());
        assert!(reopened.saved().is_empty());
    }

    #[test]
    fn test_failed_write_keeps_memory_unchanged() {
        let mut bookmarks = BookmarkStore::open(Arc::new(ReadOnlyStore), marathi());
        assert!(bookmarks.toggle_save(&hello()).is_err());
        assert!(!bookmarks.is_saved(&hello()));
    }

    #[test]
    fn test_malformed_data_loads_empty() {
        let store = Arc::new(MemoryStore::new());
        store
            .set(&StorageKey::SavedPhrases(marathi()), "{not json")
            .unwrap();

        let bookmarks = BookmarkStore::open(store, marathi());
        assert!(bookmarks.saved().is_empty());
    }

    #[test]
    fn test_load_drops_duplicate_targets() {
        let store = Arc::new(MemoryStore::new());
        let raw = serde_json::to_string(&vec![hello(), thanks(), hello()]).unwrap();
        store.set(&StorageKey::SavedPhrases(marathi()), &raw).unwrap();

        let bookmarks = BookmarkStore::open(store, marathi());
        assert_eq!(bookmarks.saved(), &[hello(), thanks()]);
    }

    #[test]
    fn test_languages_do_not_share_bookmarks() {
        let tmp = tempfile::tempdir().unwrap();
        let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::new(tmp.path()));

        let mut bookmarks = BookmarkStore::open(store.clone(), marathi());
        bookmarks.toggle_save(&hello()).unwrap();

        bookmarks.load(&LanguageCode::from("gujarati"));
        assert!(bookmarks.saved().is_empty());
        assert_eq!(bookmarks.language().as_str(), "gujarati");

        bookmarks.load(&marathi());
        assert_eq!(bookmarks.saved(), &[hello()]);
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let store = Arc::new(MemoryStore::new());
        let mut bookmarks = BookmarkStore::open(store, marathi());
        assert_eq!(bookmarks.remove_at(3).unwrap(), None);
    }
}
